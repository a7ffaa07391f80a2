// Quote pricing module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{
    CalculationTrace, DiscountKind, LineCalculationResult, LineItemInput, QuoteDiscount,
    QuoteInput, QuoteResult, QuoteTotals, TaxBreakdownEntry, TracedQuoteResult,
};
pub use services::PricingEngine;
