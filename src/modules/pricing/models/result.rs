use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::trace::CalculationTrace;
use crate::core::{Currency, MoneyAmount};

/// Priced outcome of a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCalculationResult {
    /// 1-based, matches input order
    pub line_number: usize,
    pub description: String,
    /// quantity × tax-exclusive unit price, before discounts
    pub subtotal: MoneyAmount,
    /// percentage discount + fixed discount
    pub discount_amount: MoneyAmount,
    /// subtotal − discount
    pub taxable_amount: MoneyAmount,
    pub tax_amount: MoneyAmount,
    /// taxable + tax
    pub total_amount: MoneyAmount,
}

/// Taxable and tax sums for one effective rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdownEntry {
    pub rate: Decimal,
    pub label: String,
    pub taxable_amount: MoneyAmount,
    pub tax_amount: MoneyAmount,
}

/// Quote-level sums
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    /// Sum of line subtotals (pre-discount)
    pub subtotal: MoneyAmount,
    /// Sum of line-level discounts, already reflected in line totals
    pub line_discount_amount: MoneyAmount,
    /// Sum of line taxes
    pub tax_amount: MoneyAmount,
    /// Quote-level discount only
    pub discount_amount: MoneyAmount,
    /// Sum of line totals − quote-level discount
    pub grand_total: MoneyAmount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub currency: Currency,
    pub line_calculations: Vec<LineCalculationResult>,
    pub totals: QuoteTotals,
    pub tax_breakdown: Vec<TaxBreakdownEntry>,
}

/// Result of `calculate_with_trace`: the same numbers plus the audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracedQuoteResult {
    #[serde(flatten)]
    pub result: QuoteResult,
    pub trace: CalculationTrace,
}
