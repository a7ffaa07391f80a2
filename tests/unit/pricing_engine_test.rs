// Worked pricing scenarios
//
// Known-answer tests for the line pipeline and quote aggregation:
// - simple line, compound line discount, tax-inclusive prices
// - sub-half-cent rounding
// - quote-level discount applied after tax

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use quoteflow::core::Currency;
use quoteflow::pricing::{LineItemInput, PricingEngine, QuoteDiscount, QuoteInput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_simple_hourly_line() {
    let result = PricingEngine::default()
        .calculate(&nzd_quote(vec![consulting_line()]))
        .unwrap();

    let line = &result.line_calculations[0];
    assert_eq!(line.line_number, 1);
    assert_eq!(line.description, "Consulting");
    assert_eq!(line.subtotal.amount, dec!(6000.00));
    assert_eq!(line.tax_amount.amount, dec!(900.00));
    assert_eq!(line.total_amount.amount, dec!(6900.00));

    assert_eq!(result.totals.subtotal.amount, dec!(6000.00));
    assert_eq!(result.totals.tax_amount.amount, dec!(900.00));
    assert_eq!(result.totals.grand_total.amount, dec!(6900.00));
    assert_eq!(result.currency, Currency::NZD);
}

#[test]
fn test_compound_discount() {
    let item = line("Design", dec!(20), dec!(120.00), dec!(15))
        .with_percentage_discount(dec!(10))
        .with_fixed_discount(nzd(dec!(50.00)));

    let result = PricingEngine::default().calculate(&nzd_quote(vec![item])).unwrap();
    let line = &result.line_calculations[0];

    assert_eq!(line.subtotal.amount, dec!(2400.00));
    assert_eq!(line.discount_amount.amount, dec!(290.00));
    assert_eq!(line.taxable_amount.amount, dec!(2110.00));
    assert_eq!(line.tax_amount.amount, dec!(316.50));
    assert_eq!(line.total_amount.amount, dec!(2426.50));

    // Line discounts are not the quote discount
    assert_eq!(result.totals.discount_amount.amount, Decimal::ZERO);
    assert_eq!(result.totals.line_discount_amount.amount, dec!(290.00));
    assert_eq!(result.totals.grand_total.amount, dec!(2426.50));
}

#[test]
fn test_tax_inclusive_round_trip() {
    for quantity in [dec!(1), dec!(3), dec!(7.5)] {
        let item = line("Licence", quantity, dec!(172.50), dec!(15)).tax_inclusive();
        let result = PricingEngine::default().calculate(&nzd_quote(vec![item])).unwrap();

        assert_eq!(
            result.line_calculations[0].subtotal.amount,
            dec!(150.00) * quantity,
            "quantity {}",
            quantity
        );
    }
}

#[test]
fn test_tax_inclusive_total_matches_sticker_price() {
    let item = line("Licence", dec!(2), dec!(172.50), dec!(15)).tax_inclusive();
    let result = PricingEngine::default().calculate(&nzd_quote(vec![item])).unwrap();

    assert_eq!(result.line_calculations[0].tax_amount.amount, dec!(45.00));
    assert_eq!(result.totals.grand_total.amount, dec!(345.00));
}

#[test]
fn test_non_terminating_inclusive_price_is_rounded_once() {
    // 100 / 1.15 = 86.9565…; 3 × that = 260.869… -> 260.87
    let item = line("Support", dec!(3), dec!(100.00), dec!(15)).tax_inclusive();
    let result = PricingEngine::default().calculate(&nzd_quote(vec![item])).unwrap();
    let line = &result.line_calculations[0];

    assert_eq!(line.subtotal.amount, dec!(260.87));
    assert_eq!(line.tax_amount.amount, dec!(39.13));
    assert_eq!(line.total_amount.amount, dec!(300.00));
}

#[test]
fn test_sub_half_cent_tax_rounds_to_zero() {
    let item = line("Stamp", dec!(1), dec!(0.01), dec!(15));
    let result = PricingEngine::default().calculate(&nzd_quote(vec![item])).unwrap();

    assert_eq!(result.line_calculations[0].subtotal.amount, dec!(0.01));
    assert_eq!(result.totals.tax_amount.amount, dec!(0.00));
    assert_eq!(result.totals.grand_total.amount, dec!(0.01));
}

#[test]
fn test_half_cent_tax_rounds_up() {
    // 0.10 × 5% = 0.005
    let item = line("Stamp", dec!(1), dec!(0.10), dec!(5));
    let result = PricingEngine::default().calculate(&nzd_quote(vec![item])).unwrap();
    assert_eq!(result.totals.tax_amount.amount, dec!(0.01));
}

#[test]
fn test_quote_discount_applied_post_tax() {
    let input = nzd_quote(vec![consulting_line()])
        .with_discount(QuoteDiscount::percentage(dec!(5), "Early payment"));
    let result = PricingEngine::default().calculate(&input).unwrap();

    assert_eq!(result.line_calculations[0].total_amount.amount, dec!(6900.00));
    assert_eq!(result.totals.tax_amount.amount, dec!(900.00));
    assert_eq!(result.totals.discount_amount.amount, dec!(345.00));
    assert_eq!(result.totals.grand_total.amount, dec!(6555.00));
}

#[test]
fn test_full_quote_discount_yields_zero_grand_total() {
    let input = nzd_quote(vec![consulting_line()])
        .with_discount(QuoteDiscount::fixed_amount(dec!(6900.00), "Write-off"));
    let result = PricingEngine::default().calculate(&input).unwrap();

    assert_eq!(result.totals.grand_total.amount, Decimal::ZERO);
    assert_eq!(result.totals.tax_amount.amount, dec!(900.00));
}

#[test]
fn test_line_numbers_follow_input_order() {
    let input = nzd_quote(vec![
        line("First", dec!(1), dec!(10), dec!(15)),
        line("Second", dec!(1), dec!(20), dec!(15)),
        line("Third", dec!(1), dec!(30), dec!(15)),
    ]);
    let result = PricingEngine::default().calculate(&input).unwrap();

    let numbered: Vec<(usize, &str)> = result
        .line_calculations
        .iter()
        .map(|l| (l.line_number, l.description.as_str()))
        .collect();
    assert_eq!(numbered, vec![(1, "First"), (2, "Second"), (3, "Third")]);
}

#[test]
fn test_zero_decimal_currency() {
    let item = LineItemInput::new(
        "Workshop",
        dec!(3),
        "day",
        quoteflow::core::MoneyAmount::new(dec!(1500000), Currency::IDR),
        dec!(11),
    );
    let result = PricingEngine::default()
        .calculate(&QuoteInput::new(Currency::IDR, vec![item]))
        .unwrap();

    assert_eq!(result.totals.subtotal.amount, dec!(4500000));
    assert_eq!(result.totals.tax_amount.amount, dec!(495000));
    assert_eq!(result.totals.grand_total.amount, dec!(4995000));
}

#[test]
fn test_calculation_is_idempotent() {
    let input = nzd_quote(vec![
        consulting_line().with_percentage_discount(dec!(12.5)),
        line("Hosting", dec!(12), dec!(57.50), dec!(15)).tax_inclusive(),
    ])
    .with_discount(QuoteDiscount::percentage(dec!(3), ""));

    let engine = PricingEngine::default();
    assert_eq!(engine.calculate(&input).unwrap(), engine.calculate(&input).unwrap());
}

#[test]
fn test_trace_exposes_steps_without_changing_result() {
    let input = nzd_quote(vec![line("Design", dec!(20), dec!(120.00), dec!(15))
        .with_percentage_discount(dec!(10))
        .with_fixed_discount(nzd(dec!(50.00)))])
    .with_discount(QuoteDiscount::percentage(dec!(5), ""));

    let engine = PricingEngine::default();
    let traced = engine.calculate_with_trace(&input).unwrap();
    assert_eq!(traced.result, engine.calculate(&input).unwrap());

    let line_trace = &traced.trace.lines[0];
    assert_eq!(line_trace.line_number, 1);
    assert_eq!(line_trace.input, input.line_items[0]);
    assert_eq!(line_trace.step("taxableAmount").unwrap().value, dec!(2110.00));

    let quote_trace = &traced.trace.quote;
    assert_eq!(quote_trace.step("lineTotalsSum").unwrap().value, dec!(2426.50));
    // 5% of 2426.50 = 121.325 -> 121.33
    assert_eq!(quote_trace.step("quoteDiscountAmount").unwrap().value, dec!(121.33));
    assert_eq!(quote_trace.step("grandTotal").unwrap().value, dec!(2305.17));
}
