// Calculation trace
//
// Audit/debug view of a pricing run. The engine records into it as it
// computes; it never feeds back into the numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::quote::LineItemInput;

/// One named intermediate value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStep {
    pub name: String,
    pub value: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTrace {
    pub line_number: usize,
    pub input: LineItemInput,
    pub steps: Vec<TraceStep>,
}

impl LineTrace {
    pub fn step(&self, name: &str) -> Option<&TraceStep> {
        self.steps.iter().find(|s| s.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTrace {
    pub steps: Vec<TraceStep>,
}

impl QuoteTrace {
    pub fn step(&self, name: &str) -> Option<&TraceStep> {
        self.steps.iter().find(|s| s.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationTrace {
    pub lines: Vec<LineTrace>,
    pub quote: QuoteTrace,
}

impl CalculationTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn begin_line(&mut self, line_number: usize, input: &LineItemInput) {
        self.lines.push(LineTrace {
            line_number,
            input: input.clone(),
            steps: Vec::new(),
        });
    }

    /// Appends to the most recently started line.
    pub(crate) fn record_line(&mut self, name: &str, value: Decimal, note: Option<String>) {
        if let Some(line) = self.lines.last_mut() {
            line.steps.push(TraceStep {
                name: name.to_string(),
                value,
                note,
            });
        }
    }

    pub(crate) fn record_quote(&mut self, name: &str, value: Decimal, note: Option<String>) {
        self.quote.steps.push(TraceStep {
            name: name.to_string(),
            value,
            note,
        });
    }
}

/// Optional accumulator threaded through the pricing pipeline
pub(crate) struct Recorder<'a>(Option<&'a mut CalculationTrace>);

impl<'a> Recorder<'a> {
    pub(crate) fn new(trace: Option<&'a mut CalculationTrace>) -> Self {
        Self(trace)
    }

    pub(crate) fn begin_line(&mut self, line_number: usize, input: &LineItemInput) {
        if let Some(trace) = self.0.as_deref_mut() {
            trace.begin_line(line_number, input);
        }
    }

    pub(crate) fn line(&mut self, name: &str, value: Decimal) {
        if let Some(trace) = self.0.as_deref_mut() {
            trace.record_line(name, value, None);
        }
    }

    pub(crate) fn line_with_note(
        &mut self,
        name: &str,
        value: Decimal,
        note: impl FnOnce() -> String,
    ) {
        if let Some(trace) = self.0.as_deref_mut() {
            trace.record_line(name, value, Some(note()));
        }
    }

    pub(crate) fn quote(&mut self, name: &str, value: Decimal) {
        if let Some(trace) = self.0.as_deref_mut() {
            trace.record_quote(name, value, None);
        }
    }

    pub(crate) fn quote_with_note(
        &mut self,
        name: &str,
        value: Decimal,
        note: impl FnOnce() -> String,
    ) {
        if let Some(trace) = self.0.as_deref_mut() {
            trace.record_quote(name, value, Some(note()));
        }
    }
}
