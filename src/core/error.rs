use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use std::fmt;

use crate::modules::metadata::MetadataViolation;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Name of the rule a quote input broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationConstraint {
    NonEmptyRequired,
    PositiveRequired,
    NonNegativeRequired,
    PercentageRange,
    DiscountExceedsBase,
    CurrencyMismatch,
    AmountOutOfRange,
}

impl ValidationConstraint {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationConstraint::NonEmptyRequired => "non_empty_required",
            ValidationConstraint::PositiveRequired => "positive_required",
            ValidationConstraint::NonNegativeRequired => "non_negative_required",
            ValidationConstraint::PercentageRange => "percentage_range",
            ValidationConstraint::DiscountExceedsBase => "discount_exceeds_base",
            ValidationConstraint::CurrencyMismatch => "currency_mismatch",
            ValidationConstraint::AmountOutOfRange => "amount_out_of_range",
        }
    }
}

impl fmt::Display for ValidationConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection of a quote input, raised before any arithmetic on the offending item
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {message} ({constraint})")]
pub struct ValidationError {
    /// Path to the offending field, e.g. `lineItems[2].fixedDiscount`
    pub field: String,
    pub message: String,
    pub constraint: ValidationConstraint,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        constraint: ValidationConstraint,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint,
        }
    }
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Quote input rejected by the pricing engine
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Monetary or status fields found in free-form metadata
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataViolation),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        let body = match self {
            AppError::Validation(err) => serde_json::json!({
                "error": {
                    "code": status_code.as_u16(),
                    "message": err.message,
                    "field": err.field,
                    "constraint": err.constraint,
                }
            }),
            AppError::Metadata(err) => serde_json::json!({
                "error": {
                    "code": status_code.as_u16(),
                    "message": err.to_string(),
                    "field": "metadata",
                    "forbidden_fields": err.fields,
                }
            }),
            _ => serde_json::json!({
                "error": {
                    "code": status_code.as_u16(),
                    "message": self.to_string(),
                }
            }),
        };

        HttpResponse::build(status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Metadata(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
