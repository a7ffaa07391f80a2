//! Keeps monetary and status fields out of free-form metadata.
//!
//! Totals and statuses belong in typed columns; metadata is an opaque side
//! channel. The check is a flat denylist over top-level keys: key names are
//! compared case-insensitively with `_` and `-` ignored, so `grandTotal`,
//! `grand_total` and `Grand-Total` are all caught. Nested values are not
//! inspected.

use serde_json::Value;

/// Normalized field names that must never appear in metadata
const FORBIDDEN_FIELDS: &[&str] = &[
    "amount",
    "subtotal",
    "taxamount",
    "taxtotal",
    "taxableamount",
    "totalamount",
    "total",
    "grandtotal",
    "discountamount",
    "linediscountamount",
    "unitprice",
    "taxrate",
    "currency",
    "status",
];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("metadata must not contain monetary or status fields: {}", fields.join(", "))]
pub struct MetadataViolation {
    /// Offending keys as they were written
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataGuard;

impl MetadataGuard {
    pub fn new() -> Self {
        Self
    }

    /// Rejects an object whose top-level keys hit the denylist.
    /// `null` and non-object values pass.
    pub fn check(&self, metadata: &Value) -> Result<(), MetadataViolation> {
        let Some(object) = metadata.as_object() else {
            return Ok(());
        };

        let fields: Vec<String> = object
            .keys()
            .filter(|key| Self::is_forbidden(key))
            .cloned()
            .collect();

        if fields.is_empty() {
            Ok(())
        } else {
            Err(MetadataViolation { fields })
        }
    }

    pub fn is_forbidden(key: &str) -> bool {
        let normalized: String = key
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        FORBIDDEN_FIELDS.contains(&normalized.as_str())
    }
}
