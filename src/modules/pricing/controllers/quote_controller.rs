use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{AppError, ValidationError};
use crate::modules::metadata::MetadataGuard;
use crate::modules::pricing::models::{CalculationTrace, QuoteInput, QuoteResult};
use crate::modules::pricing::services::PricingEngine;

/// Body of POST /quotes/calculate
#[derive(Debug, Deserialize)]
pub struct CalculateQuoteRequest {
    #[serde(flatten)]
    pub quote: QuoteInput,

    /// Free-form caller metadata, echoed back after the denylist check
    #[serde(default)]
    pub metadata: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct CalculateQuoteResponse {
    #[serde(flatten)]
    pub result: QuoteResult,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<CalculationTrace>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Query parameters for quote calculation
#[derive(Debug, Deserialize)]
pub struct CalculateQuoteQuery {
    #[serde(default)]
    pub trace: bool,
}

/// Price a quote
/// POST /quotes/calculate[?trace=true]
pub async fn calculate_quote(
    engine: web::Data<PricingEngine>,
    query: web::Query<CalculateQuoteQuery>,
    request: web::Json<CalculateQuoteRequest>,
) -> Result<HttpResponse, AppError> {
    let CalculateQuoteRequest { quote, metadata } = request.into_inner();

    if let Some(metadata) = &metadata {
        MetadataGuard::new().check(metadata).map_err(|e| {
            tracing::warn!(fields = ?e.fields, "Rejected quote metadata");
            e
        })?;
    }

    let (result, trace) = if query.trace {
        let traced = engine.calculate_with_trace(&quote).map_err(log_rejection)?;
        (traced.result, Some(traced.trace))
    } else {
        (engine.calculate(&quote).map_err(log_rejection)?, None)
    };

    tracing::info!(
        currency = %result.currency,
        lines = result.line_calculations.len(),
        grand_total = %result.totals.grand_total.amount,
        traced = trace.is_some(),
        "Quote priced"
    );

    Ok(HttpResponse::Ok().json(CalculateQuoteResponse {
        result,
        trace,
        metadata,
    }))
}

fn log_rejection(err: ValidationError) -> AppError {
    tracing::warn!(
        field = %err.field,
        constraint = %err.constraint,
        "Quote rejected: {}",
        err.message
    );
    AppError::Validation(err)
}

/// Configure quote routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/quotes").route("/calculate", web::post().to(calculate_quote)));
}
