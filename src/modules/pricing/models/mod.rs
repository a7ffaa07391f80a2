mod quote;
mod result;
mod trace;

pub use quote::{DiscountKind, LineItemInput, QuoteDiscount, QuoteInput};
pub use result::{
    LineCalculationResult, QuoteResult, QuoteTotals, TaxBreakdownEntry, TracedQuoteResult,
};
pub(crate) use trace::Recorder;
pub use trace::{CalculationTrace, LineTrace, QuoteTrace, TraceStep};
