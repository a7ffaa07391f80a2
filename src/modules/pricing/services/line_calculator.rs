// Per-line pricing pipeline
//
// Order is fixed:
//   1. tax-inclusive price -> tax-exclusive price (once, before quantity)
//   2. subtotal = quantity × exclusive price
//   3. percentage discount on the subtotal
//   4. fixed discount, bounded by what the percentage discount left
//   5. taxable = subtotal − discounts
//   6. tax on taxable, half-up to the minor unit
//   7. total = taxable + tax
//
// Every amount that leaves this file is rounded to the currency's minor
// unit, so sums taken downstream are exact.

use rust_decimal::Decimal;

use super::quote_validator::{check_discount_within_base, within_range};
use crate::core::{Currency, MoneyAmount, ValidationError};
use crate::modules::pricing::models::{LineCalculationResult, LineItemInput, Recorder};
use crate::modules::taxes::TaxCalculator;

/// A priced line plus the rate it was actually taxed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    pub effective_rate: Decimal,
    pub result: LineCalculationResult,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LineCalculator {
    tax_calculator: TaxCalculator,
}

impl LineCalculator {
    pub fn new() -> Self {
        Self {
            tax_calculator: TaxCalculator::new(),
        }
    }

    /// Prices one line. `index` is the 0-based position in the quote.
    ///
    /// Expects the line to have passed `QuoteValidator::validate_line`; only
    /// the bounds that depend on computed figures are checked here: the fixed
    /// discount against its base, and every product or sum against the range
    /// of `Decimal`.
    pub(crate) fn calculate(
        &self,
        index: usize,
        line: &LineItemInput,
        currency: Currency,
        recorder: &mut Recorder<'_>,
    ) -> Result<PricedLine, ValidationError> {
        let line_number = index + 1;
        let line_path = format!("lineItems[{}]", index);
        recorder.begin_line(line_number, line);

        let effective_rate = self
            .tax_calculator
            .effective_rate(line.tax_rate, line.is_tax_exempt);

        // 1. An exempt line's price carries no tax, so only its effective rate
        //    is backed out.
        let unit_price = if line.tax_inclusive {
            let exclusive = within_range(
                &line_path,
                self.tax_calculator
                    .exclusive_price(line.unit_price.amount, effective_rate),
            )?;
            recorder.line_with_note("exclusiveUnitPrice", exclusive, || {
                format!(
                    "{} / (1 + {}/100)",
                    line.unit_price.amount,
                    effective_rate.normalize()
                )
            });
            exclusive
        } else {
            recorder.line("exclusiveUnitPrice", line.unit_price.amount);
            line.unit_price.amount
        };

        // 2.
        let subtotal = within_range(&line_path, line.quantity.checked_mul(unit_price))?;
        let subtotal = currency.round(subtotal);
        recorder.line_with_note("subtotal", subtotal, || {
            format!("{} × {}", line.quantity.normalize(), unit_price)
        });

        // 3. pct/100 ≤ 1, so this never exceeds the subtotal
        let percentage_discount = match line.percentage_discount {
            Some(percentage) => {
                let amount = (percentage / Decimal::ONE_HUNDRED).checked_mul(subtotal);
                currency.round(within_range(&line_path, amount)?)
            }
            None => Decimal::ZERO,
        };
        recorder.line("percentageDiscountAmount", percentage_discount);

        // 4.
        let fixed_discount = match &line.fixed_discount {
            Some(fixed) => {
                check_discount_within_base(
                    &format!("{}.fixedDiscount", line_path),
                    fixed.amount,
                    subtotal - percentage_discount,
                )?;
                currency.round(fixed.amount)
            }
            None => Decimal::ZERO,
        };
        recorder.line("fixedDiscountAmount", fixed_discount);

        let discount = percentage_discount + fixed_discount;
        recorder.line("discountAmount", discount);

        // 5.
        let taxable = subtotal - discount;
        recorder.line("taxableAmount", taxable);

        // 6.
        let tax = within_range(
            &line_path,
            self.tax_calculator
                .calculate_tax(taxable, effective_rate, currency),
        )?;
        recorder.line_with_note("taxAmount", tax, || {
            if line.is_tax_exempt {
                "exempt".to_string()
            } else {
                format!("{} × {}%", taxable, effective_rate.normalize())
            }
        });

        // 7.
        let total = within_range(&line_path, taxable.checked_add(tax))?;
        recorder.line("totalAmount", total);

        let money = |amount| MoneyAmount::new(amount, currency);

        Ok(PricedLine {
            effective_rate,
            result: LineCalculationResult {
                line_number,
                description: line.description.clone(),
                subtotal: money(subtotal),
                discount_amount: money(discount),
                taxable_amount: money(taxable),
                tax_amount: money(tax),
                total_amount: money(total),
            },
        })
    }
}
