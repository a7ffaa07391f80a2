use actix_web::{web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Currency, MoneyAmount};
use crate::modules::pricing::{LineItemInput, PricingEngine, QuoteInput};

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub pricing_engine: bool,
}

/// GET /health - Liveness probe
/// Returns 200 if the application can respond to requests
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// Prices a one-line canary quote and checks the known answer
pub async fn readiness_check(engine: web::Data<PricingEngine>) -> impl Responder {
    let canary = QuoteInput::new(
        Currency::NZD,
        vec![LineItemInput::new(
            "readiness canary",
            Decimal::ONE,
            "each",
            MoneyAmount::new(Decimal::ONE_HUNDRED, Currency::NZD),
            Decimal::from(15),
        )],
    );

    let pricing_engine = match engine.calculate(&canary) {
        Ok(result) => result.totals.grand_total.amount == Decimal::from(115),
        Err(e) => {
            tracing::error!("Pricing engine readiness check failed: {}", e);
            false
        }
    };

    let response = ReadinessResponse {
        ready: pricing_engine,
        checks: ReadinessChecks { pricing_engine },
    };

    if response.ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
