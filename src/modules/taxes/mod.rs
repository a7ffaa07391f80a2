pub mod models;
pub mod services;

pub use models::TaxLabels;
pub use services::TaxCalculator;
