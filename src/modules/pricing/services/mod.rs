pub mod line_calculator;
pub mod pricing_engine;
pub mod quote_validator;
pub mod tax_breakdown;

pub use line_calculator::{LineCalculator, PricedLine};
pub use pricing_engine::PricingEngine;
pub use quote_validator::QuoteValidator;
pub use tax_breakdown::aggregate_tax_breakdown;
