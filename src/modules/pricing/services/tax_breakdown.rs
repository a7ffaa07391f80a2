use rust_decimal::Decimal;

use super::line_calculator::PricedLine;
use crate::core::{Currency, MoneyAmount};
use crate::modules::pricing::models::TaxBreakdownEntry;
use crate::modules::taxes::TaxLabels;

/// Groups priced lines by effective tax rate.
///
/// Buckets appear in the order their rate is first seen. Exempt lines
/// already carry an effective rate of 0 and land in the 0% bucket.
pub fn aggregate_tax_breakdown(
    lines: &[PricedLine],
    labels: &TaxLabels,
    currency: Currency,
) -> Vec<TaxBreakdownEntry> {
    let mut buckets: Vec<(Decimal, Decimal, Decimal)> = Vec::new();

    for line in lines {
        let taxable = line.result.taxable_amount.amount;
        let tax = line.result.tax_amount.amount;

        match buckets.iter_mut().find(|(rate, _, _)| *rate == line.effective_rate) {
            Some((_, bucket_taxable, bucket_tax)) => {
                *bucket_taxable += taxable;
                *bucket_tax += tax;
            }
            None => buckets.push((line.effective_rate, taxable, tax)),
        }
    }

    buckets
        .into_iter()
        .map(|(rate, taxable, tax)| TaxBreakdownEntry {
            rate: rate.normalize(),
            label: labels.label_for(rate),
            taxable_amount: MoneyAmount::new(taxable, currency),
            tax_amount: MoneyAmount::new(tax, currency),
        })
        .collect()
}
