use rust_decimal::Decimal;

use crate::core::{Currency, ValidationConstraint, ValidationError};

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// TaxCalculator handles per-line tax arithmetic on percentage rates.
///
/// Arithmetic is checked: `None` means the result does not fit in a
/// `Decimal` and the caller decides which field to blame.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Tax rates are percentages and must not be negative. There is no upper
    /// bound; surcharges above 100% are legal inputs.
    pub fn validate_tax_rate(&self, tax_rate: Decimal, field: &str) -> Result<(), ValidationError> {
        if tax_rate < Decimal::ZERO {
            return Err(ValidationError::new(
                field,
                format!("Tax rate cannot be negative, got: {}", tax_rate),
                ValidationConstraint::NonNegativeRequired,
            ));
        }

        Ok(())
    }

    /// Rate a line is actually taxed at: exempt lines are always 0%.
    pub fn effective_rate(&self, tax_rate: Decimal, is_tax_exempt: bool) -> Decimal {
        if is_tax_exempt {
            Decimal::ZERO
        } else {
            tax_rate
        }
    }

    /// Converts a price that already embeds tax at `tax_rate` into its
    /// tax-exclusive equivalent. Not rounded: the caller scales by quantity
    /// first and rounds the result once.
    pub fn exclusive_price(&self, inclusive_price: Decimal, tax_rate: Decimal) -> Option<Decimal> {
        if tax_rate.is_zero() {
            return Some(inclusive_price);
        }
        let divisor = Decimal::ONE.checked_add(tax_rate.checked_div(ONE_HUNDRED)?)?;
        inclusive_price.checked_div(divisor)
    }

    /// tax = taxable × rate / 100, rounded half-up to the currency's minor unit.
    /// Sub-half-unit results round to zero.
    pub fn calculate_tax(
        &self,
        taxable_amount: Decimal,
        effective_rate: Decimal,
        currency: Currency,
    ) -> Option<Decimal> {
        if effective_rate.is_zero() {
            return Some(Decimal::ZERO);
        }
        let tax = taxable_amount.checked_mul(effective_rate.checked_div(ONE_HUNDRED)?)?;
        Some(currency.round(tax))
    }
}
