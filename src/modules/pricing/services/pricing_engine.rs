use rust_decimal::Decimal;

use super::line_calculator::{LineCalculator, PricedLine};
use super::quote_validator::{check_discount_within_base, within_range, QuoteValidator};
use super::tax_breakdown::aggregate_tax_breakdown;
use crate::core::{Currency, MoneyAmount, ValidationError};
use crate::modules::pricing::models::{
    CalculationTrace, DiscountKind, QuoteDiscount, QuoteInput, QuoteResult, QuoteTotals, Recorder,
    TracedQuoteResult,
};
use crate::modules::taxes::TaxLabels;

/// Turns a quote into an exact monetary breakdown.
///
/// Pure and stateless apart from the label configuration: no I/O, no
/// logging, and identical input always yields identical output. Safe to
/// share across threads.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    labels: TaxLabels,
    validator: QuoteValidator,
    line_calculator: LineCalculator,
}

impl PricingEngine {
    pub fn new(labels: TaxLabels) -> Self {
        Self {
            labels,
            validator: QuoteValidator::new(),
            line_calculator: LineCalculator::new(),
        }
    }

    pub fn labels(&self) -> &TaxLabels {
        &self.labels
    }

    /// Prices the quote. All-or-nothing: any invalid field aborts the run.
    pub fn calculate(&self, input: &QuoteInput) -> Result<QuoteResult, ValidationError> {
        self.run(input, Recorder::new(None))
    }

    /// Same as [`calculate`](Self::calculate), additionally returning every
    /// named intermediate value per line and per quote.
    pub fn calculate_with_trace(
        &self,
        input: &QuoteInput,
    ) -> Result<TracedQuoteResult, ValidationError> {
        let mut trace = CalculationTrace::new();
        let result = self.run(input, Recorder::new(Some(&mut trace)))?;
        Ok(TracedQuoteResult { result, trace })
    }

    fn run(
        &self,
        input: &QuoteInput,
        mut recorder: Recorder<'_>,
    ) -> Result<QuoteResult, ValidationError> {
        self.validator.validate_line_items(&input.line_items)?;

        // Each line is validated right before it is priced, so errors surface
        // in input order whichever check catches them.
        let currency = input.currency;
        let mut lines = Vec::with_capacity(input.line_items.len());
        for (index, line) in input.line_items.iter().enumerate() {
            self.validator.validate_line(index, line, currency)?;
            lines.push(
                self.line_calculator
                    .calculate(index, line, currency, &mut recorder)?,
            );
        }

        if let Some(discount) = &input.quote_discount {
            self.validator.validate_quote_discount(discount)?;
        }

        let subtotal = sum_lines(&lines, |l| l.result.subtotal.amount)?;
        let line_discount = sum_lines(&lines, |l| l.result.discount_amount.amount)?;
        let tax = sum_lines(&lines, |l| l.result.tax_amount.amount)?;
        let line_totals = sum_lines(&lines, |l| l.result.total_amount.amount)?;

        recorder.quote("subtotal", subtotal);
        recorder.quote("lineDiscountAmount", line_discount);
        recorder.quote("taxAmount", tax);
        recorder.quote_with_note("lineTotalsSum", line_totals, || {
            format!("sum of {} line totals", lines.len())
        });

        let quote_discount = match &input.quote_discount {
            Some(discount) => quote_discount_amount(discount, line_totals, currency)?,
            None => Decimal::ZERO,
        };
        recorder.quote_with_note("quoteDiscountAmount", quote_discount, || {
            match &input.quote_discount {
                Some(d) if d.kind == DiscountKind::Percentage => {
                    format!("{}% of {}", d.value.normalize(), line_totals)
                }
                Some(_) => "fixed amount".to_string(),
                None => "no quote discount".to_string(),
            }
        });

        let grand_total = line_totals - quote_discount;
        recorder.quote_with_note("grandTotal", grand_total, || {
            format!("{} − {}", line_totals, quote_discount)
        });

        let tax_breakdown = aggregate_tax_breakdown(&lines, &self.labels, currency);
        let money = |amount| MoneyAmount::new(amount, currency);

        Ok(QuoteResult {
            currency,
            line_calculations: lines.into_iter().map(|l| l.result).collect(),
            totals: QuoteTotals {
                subtotal: money(subtotal),
                line_discount_amount: money(line_discount),
                tax_amount: money(tax),
                discount_amount: money(quote_discount),
                grand_total: money(grand_total),
            },
            tax_breakdown,
        })
    }
}

/// Sums one figure across all priced lines. Every figure is non-negative,
/// so the breakdown buckets built from these lines stay within range too.
fn sum_lines(
    lines: &[PricedLine],
    field: fn(&PricedLine) -> Decimal,
) -> Result<Decimal, ValidationError> {
    let total = lines
        .iter()
        .map(field)
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount));
    within_range("lineItems", total)
}

/// Quote-level discount against the tax-inclusive sum of line totals.
/// Never reduces already computed line tax.
fn quote_discount_amount(
    discount: &QuoteDiscount,
    line_totals: Decimal,
    currency: Currency,
) -> Result<Decimal, ValidationError> {
    match discount.kind {
        DiscountKind::Percentage => {
            // value ≤ 100, so the discount never exceeds the line totals
            let amount = (discount.value / Decimal::ONE_HUNDRED).checked_mul(line_totals);
            Ok(currency.round(within_range("quoteDiscount.value", amount)?))
        }
        DiscountKind::FixedAmount => {
            check_discount_within_base("quoteDiscount.value", discount.value, line_totals)?;
            Ok(currency.round(discount.value))
        }
    }
}
