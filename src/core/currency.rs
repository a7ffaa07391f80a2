use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported quote currencies with their minor-unit precision rules.
///
/// Deserialization goes through `FromStr`, so an unsupported code is
/// rejected with the list of supported ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Currency {
    /// New Zealand Dollar (2 decimal places)
    NZD,
    /// Australian Dollar (2 decimal places)
    AUD,
    /// US Dollar (2 decimal places)
    USD,
    /// Euro (2 decimal places)
    EUR,
    /// Pound Sterling (2 decimal places)
    GBP,
    /// Singapore Dollar (2 decimal places)
    SGD,
    /// Malaysian Ringgit (2 decimal places)
    MYR,
    /// Indonesian Rupiah (no decimal places)
    IDR,
    /// Japanese Yen (no decimal places)
    JPY,
}

impl Currency {
    pub const ALL: [Currency; 9] = [
        Currency::NZD,
        Currency::AUD,
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::SGD,
        Currency::MYR,
        Currency::IDR,
        Currency::JPY,
    ];

    /// Returns the number of minor-unit digits for this currency
    /// - IDR/JPY: 0
    /// - everything else: 2
    pub fn scale(&self) -> u32 {
        match self {
            Currency::IDR | Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Rounds to the currency's minor unit using round-half-up.
    ///
    /// Monetary values in a quote are never negative, so away-from-zero on the
    /// midpoint is the same as half-up.
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.scale(), RoundingStrategy::MidpointAwayFromZero)
    }

    /// Returns the smallest unit for this currency
    pub fn smallest_unit(&self) -> Decimal {
        Decimal::new(1, self.scale())
    }

    /// Formats an amount for display with the correct decimal places
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!(
            "{} {:.width$}",
            self,
            self.round(amount),
            width = self.scale() as usize
        )
    }

    fn code(&self) -> &'static str {
        match self {
            Currency::NZD => "NZD",
            Currency::AUD => "AUD",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::SGD => "SGD",
            Currency::MYR => "MYR",
            Currency::IDR => "IDR",
            Currency::JPY => "JPY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == code)
            .ok_or_else(|| {
                let supported: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
                format!(
                    "Unsupported currency: {} (supported: {})",
                    s,
                    supported.join(", ")
                )
            })
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
