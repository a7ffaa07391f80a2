// Structural validation of a quote.
//
// The engine checks each line right before pricing it, so the first
// violation in input order wins even when it is only detectable from
// computed figures (a fixed discount against its line's base, an amount
// too large to represent). Those computed bounds use the helpers at the
// bottom of this file.

use rust_decimal::Decimal;

use crate::core::{Currency, MoneyAmount, ValidationConstraint, ValidationError};
use crate::modules::pricing::models::{DiscountKind, LineItemInput, QuoteDiscount};
use crate::modules::taxes::TaxCalculator;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteValidator {
    tax_calculator: TaxCalculator,
}

impl QuoteValidator {
    pub fn new() -> Self {
        Self {
            tax_calculator: TaxCalculator::new(),
        }
    }

    pub fn validate_line_items(&self, line_items: &[LineItemInput]) -> Result<(), ValidationError> {
        if line_items.is_empty() {
            return Err(ValidationError::new(
                "lineItems",
                "Quote must have at least one line item",
                ValidationConstraint::NonEmptyRequired,
            ));
        }
        Ok(())
    }

    /// Checks every field of one line that can be judged without pricing it.
    /// `index` is the 0-based position used in field paths.
    pub fn validate_line(
        &self,
        index: usize,
        line: &LineItemInput,
        currency: Currency,
    ) -> Result<(), ValidationError> {
        let path = |field: &str| format!("lineItems[{}].{}", index, field);

        if line.quantity <= Decimal::ZERO {
            return Err(ValidationError::new(
                path("quantity"),
                format!("Quantity must be positive, got: {}", line.quantity),
                ValidationConstraint::PositiveRequired,
            ));
        }

        if line.unit_price.is_negative() {
            return Err(ValidationError::new(
                path("unitPrice"),
                format!("Unit price must be non-negative, got: {}", line.unit_price.amount),
                ValidationConstraint::NonNegativeRequired,
            ));
        }
        check_currency(&path("unitPrice"), &line.unit_price, currency)?;

        self.tax_calculator
            .validate_tax_rate(line.tax_rate, &path("taxRate"))?;

        if let Some(percentage) = line.percentage_discount {
            check_percentage(&path("percentageDiscount"), percentage)?;
        }

        if let Some(fixed) = &line.fixed_discount {
            if fixed.is_negative() {
                return Err(ValidationError::new(
                    path("fixedDiscount"),
                    format!("Fixed discount must be non-negative, got: {}", fixed.amount),
                    ValidationConstraint::NonNegativeRequired,
                ));
            }
            check_currency(&path("fixedDiscount"), fixed, currency)?;
        }

        Ok(())
    }

    /// Structural checks only; the fixed-amount bound needs the line totals.
    pub fn validate_quote_discount(&self, discount: &QuoteDiscount) -> Result<(), ValidationError> {
        match discount.kind {
            DiscountKind::Percentage => check_percentage("quoteDiscount.value", discount.value),
            DiscountKind::FixedAmount if discount.value < Decimal::ZERO => {
                Err(ValidationError::new(
                    "quoteDiscount.value",
                    format!("Fixed discount must be non-negative, got: {}", discount.value),
                    ValidationConstraint::NonNegativeRequired,
                ))
            }
            DiscountKind::FixedAmount => Ok(()),
        }
    }
}

fn check_percentage(field: &str, percentage: Decimal) -> Result<(), ValidationError> {
    if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
        return Err(ValidationError::new(
            field,
            format!("Percentage discount must be between 0 and 100, got: {}", percentage),
            ValidationConstraint::PercentageRange,
        ));
    }
    Ok(())
}

fn check_currency(
    field: &str,
    money: &MoneyAmount,
    currency: Currency,
) -> Result<(), ValidationError> {
    if money.currency != currency {
        return Err(ValidationError::new(
            format!("{}.currency", field),
            format!(
                "Amount is in {} but the quote is priced in {}",
                money.currency, currency
            ),
            ValidationConstraint::CurrencyMismatch,
        ));
    }
    Ok(())
}

/// A discount may consume its base entirely but never exceed it.
pub(crate) fn check_discount_within_base(
    field: &str,
    discount: Decimal,
    base: Decimal,
) -> Result<(), ValidationError> {
    if discount > base {
        return Err(ValidationError::new(
            field,
            format!("Discount {} exceeds the amount it applies to ({})", discount, base),
            ValidationConstraint::DiscountExceedsBase,
        ));
    }
    Ok(())
}

/// Unwraps a checked `Decimal` operation, blaming `field` when the result
/// does not fit (magnitudes beyond roughly 7.9 × 10^28).
pub(crate) fn within_range(
    field: &str,
    value: Option<Decimal>,
) -> Result<Decimal, ValidationError> {
    value.ok_or_else(|| {
        ValidationError::new(
            field,
            "Amount is too large to calculate exactly",
            ValidationConstraint::AmountOutOfRange,
        )
    })
}
