// Quote input models
//
// A quote is an ordered list of priced line items plus an optional
// quote-level discount, all in a single currency. Unit prices and tax
// rates arrive fully resolved; nothing here looks up rate cards or FX.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Currency, MoneyAmount};

/// A single priced line on a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    pub description: String,

    /// Must be positive; fractional quantities (e.g. hours) are allowed
    pub quantity: Decimal,

    /// Unit label such as "hour" or "each"
    #[serde(default)]
    pub unit: String,

    /// Price per unit; tax-inclusive when `tax_inclusive` is set
    pub unit_price: MoneyAmount,

    /// Percentage, e.g. 15 for 15%
    #[serde(default)]
    pub tax_rate: Decimal,

    #[serde(default)]
    pub tax_inclusive: bool,

    #[serde(default)]
    pub is_tax_exempt: bool,

    /// Percentage discount in [0, 100]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_discount: Option<Decimal>,

    /// Fixed discount taken after the percentage discount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_discount: Option<MoneyAmount>,
}

impl LineItemInput {
    /// Tax-exclusive line with no discounts
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
        unit_price: MoneyAmount,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit: unit.into(),
            unit_price,
            tax_rate,
            tax_inclusive: false,
            is_tax_exempt: false,
            percentage_discount: None,
            fixed_discount: None,
        }
    }

    pub fn tax_inclusive(mut self) -> Self {
        self.tax_inclusive = true;
        self
    }

    pub fn tax_exempt(mut self) -> Self {
        self.is_tax_exempt = true;
        self
    }

    pub fn with_percentage_discount(mut self, percentage: Decimal) -> Self {
        self.percentage_discount = Some(percentage);
        self
    }

    pub fn with_fixed_discount(mut self, discount: MoneyAmount) -> Self {
        self.fixed_discount = Some(discount);
        self
    }
}

/// How a quote-level discount is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    Percentage,
    FixedAmount,
}

/// Discount applied once to the sum of line totals (tax included)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDiscount {
    pub kind: DiscountKind,

    /// Percentage for `Percentage`, amount in quote currency for `FixedAmount`
    pub value: Decimal,

    #[serde(default)]
    pub description: String,
}

impl QuoteDiscount {
    pub fn percentage(value: Decimal, description: impl Into<String>) -> Self {
        Self {
            kind: DiscountKind::Percentage,
            value,
            description: description.into(),
        }
    }

    pub fn fixed_amount(value: Decimal, description: impl Into<String>) -> Self {
        Self {
            kind: DiscountKind::FixedAmount,
            value,
            description: description.into(),
        }
    }
}

/// Everything the pricing engine needs to price a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    pub line_items: Vec<LineItemInput>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_discount: Option<QuoteDiscount>,

    pub currency: Currency,
}

impl QuoteInput {
    pub fn new(currency: Currency, line_items: Vec<LineItemInput>) -> Self {
        Self {
            line_items,
            quote_discount: None,
            currency,
        }
    }

    pub fn with_discount(mut self, discount: QuoteDiscount) -> Self {
        self.quote_discount = Some(discount);
        self
    }
}
