use rust_decimal::Decimal;
use std::env;

use super::server::parse_var;
use crate::core::{AppError, Result};
use crate::modules::taxes::TaxLabels;

/// Organization-level pricing settings
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Standard tax rate as a percentage, e.g. 15
    pub standard_tax_rate: Decimal,
    /// Display name of the standard rate, e.g. "GST"
    pub standard_tax_name: String,
}

impl PricingConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            standard_tax_rate: parse_var("STANDARD_TAX_RATE", Decimal::from(15))?,
            standard_tax_name: env::var("STANDARD_TAX_NAME").unwrap_or_else(|_| "GST".to_string()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.standard_tax_rate < Decimal::ZERO {
            return Err(AppError::Configuration(
                "Standard tax rate cannot be negative".to_string(),
            ));
        }

        if self.standard_tax_name.trim().is_empty() {
            return Err(AppError::Configuration(
                "Standard tax name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn tax_labels(&self) -> TaxLabels {
        TaxLabels::new(self.standard_tax_rate, self.standard_tax_name.trim())
    }
}
