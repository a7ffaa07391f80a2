use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display names for tax-breakdown buckets.
///
/// The organization's standard rate gets its own name (e.g. "GST 15%"),
/// 0% is "Exempt" and any other rate gets a generic percentage label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLabels {
    pub standard_rate: Decimal,
    pub standard_name: String,
}

impl TaxLabels {
    pub fn new(standard_rate: Decimal, standard_name: impl Into<String>) -> Self {
        Self {
            standard_rate,
            standard_name: standard_name.into(),
        }
    }

    pub fn label_for(&self, rate: Decimal) -> String {
        if rate.is_zero() {
            "Exempt".to_string()
        } else if rate == self.standard_rate {
            format!("{} {}%", self.standard_name, rate.normalize())
        } else {
            format!("Tax {}%", rate.normalize())
        }
    }
}

impl Default for TaxLabels {
    fn default() -> Self {
        Self::new(Decimal::from(15), "GST")
    }
}
