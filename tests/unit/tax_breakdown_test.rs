// Tax breakdown grouping across mixed-rate quotes

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use quoteflow::pricing::PricingEngine;
use quoteflow::taxes::TaxLabels;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_mixed_rates_produce_one_entry_per_rate() {
    let input = nzd_quote(vec![
        line("Standard", dec!(10), dec!(100.00), dec!(15)),
        // Nominal 15% but exempt: lands in the 0% bucket
        line("Export", dec!(5), dec!(40.00), dec!(15)).tax_exempt(),
        line("Reduced", dec!(4), dec!(250.00), dec!(10)),
    ]);
    let result = PricingEngine::default().calculate(&input).unwrap();
    let breakdown = &result.tax_breakdown;

    assert_eq!(breakdown.len(), 3);

    assert_eq!(breakdown[0].rate, dec!(15));
    assert_eq!(breakdown[0].label, "GST 15%");
    assert_eq!(breakdown[0].taxable_amount.amount, dec!(1000.00));
    assert_eq!(breakdown[0].tax_amount.amount, result.line_calculations[0].tax_amount.amount);
    assert_eq!(breakdown[0].tax_amount.amount, dec!(150.00));

    assert_eq!(breakdown[1].rate, Decimal::ZERO);
    assert_eq!(breakdown[1].label, "Exempt");
    assert_eq!(breakdown[1].taxable_amount.amount, dec!(200.00));
    assert_eq!(breakdown[1].tax_amount.amount, Decimal::ZERO);

    assert_eq!(breakdown[2].rate, dec!(10));
    assert_eq!(breakdown[2].label, "Tax 10%");
    assert_eq!(breakdown[2].tax_amount.amount, result.line_calculations[2].tax_amount.amount);
    assert_eq!(breakdown[2].tax_amount.amount, dec!(100.00));

    let sum: Decimal = breakdown.iter().map(|e| e.tax_amount.amount).sum();
    assert_eq!(sum, result.totals.tax_amount.amount);
    assert_eq!(result.totals.tax_amount.amount, dec!(250.00));
}

#[test]
fn test_same_rate_lines_share_a_bucket() {
    let input = nzd_quote(vec![
        line("A", dec!(1), dec!(10.00), dec!(15)),
        line("B", dec!(2), dec!(10.00), dec!(15.0)),
        line("C", dec!(3), dec!(10.00), dec!(15.00)),
    ]);
    let result = PricingEngine::default().calculate(&input).unwrap();

    assert_eq!(result.tax_breakdown.len(), 1);
    assert_eq!(result.tax_breakdown[0].taxable_amount.amount, dec!(60.00));
    assert_eq!(result.tax_breakdown[0].tax_amount.amount, dec!(9.00));
}

#[test]
fn test_exempt_and_zero_rated_share_the_zero_bucket() {
    let input = nzd_quote(vec![
        line("Zero rated", dec!(1), dec!(10.00), dec!(0)),
        line("Exempt", dec!(1), dec!(20.00), dec!(15)).tax_exempt(),
    ]);
    let result = PricingEngine::default().calculate(&input).unwrap();

    assert_eq!(result.tax_breakdown.len(), 1);
    assert_eq!(result.tax_breakdown[0].label, "Exempt");
    assert_eq!(result.tax_breakdown[0].taxable_amount.amount, dec!(30.00));
}

#[test]
fn test_quote_discount_does_not_touch_breakdown() {
    let input = nzd_quote(vec![consulting_line()])
        .with_discount(quoteflow::pricing::QuoteDiscount::percentage(dec!(5), ""));
    let result = PricingEngine::default().calculate(&input).unwrap();

    assert_eq!(result.tax_breakdown[0].taxable_amount.amount, dec!(6000.00));
    assert_eq!(result.tax_breakdown[0].tax_amount.amount, dec!(900.00));
}

#[test]
fn test_labels_follow_configured_standard_rate() {
    let engine = PricingEngine::new(TaxLabels::new(dec!(10), "VAT"));
    let input = nzd_quote(vec![
        line("Standard", dec!(1), dec!(100.00), dec!(10)),
        line("Other", dec!(1), dec!(100.00), dec!(15)),
    ]);
    let result = engine.calculate(&input).unwrap();

    assert_eq!(result.tax_breakdown[0].label, "VAT 10%");
    assert_eq!(result.tax_breakdown[1].label, "Tax 15%");
}
