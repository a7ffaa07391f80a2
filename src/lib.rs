//! Quoteflow quote pricing service library
//!
//! Prices quotes (line items, discounts, mixed tax rates) with exact decimal
//! arithmetic and exposes the engine over HTTP.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

use actix_web::web;

// Re-export commonly used types
pub use modules::metadata;
pub use modules::pricing;
pub use modules::taxes;

/// Registers every route: probes at the root, the pricing API under `/api`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(modules::health::controllers::configure)
        .service(web::scope("/api").configure(modules::pricing::controllers::configure));
}
