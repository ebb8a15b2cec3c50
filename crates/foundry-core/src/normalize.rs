// File: crates/foundry-core/src/normalize.rs
// Summary: Canonicalizes raw records into CanonicalRecord using one fixed field precedence.

use serde::Serialize;

use crate::dataset::{Record, Scalar};

/// Field precedence, first present wins.
pub const CATEGORY_KEYS: [&str; 2] = ["name", "category"];
pub const VALUE_KEYS: [&str; 3] = ["value", "y", "count"];
pub const X_KEYS: [&str; 2] = ["x", "category"];
pub const Y_KEYS: [&str; 3] = ["y", "value", "count"];
pub const SERIES_KEYS: [&str; 2] = ["series", "seriesName"];

/// Record with every role the adapters need resolved.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    pub category: String,
    pub value: f64,
    pub x: Scalar,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_name: Option<String>,
}

impl CanonicalRecord {
    /// Numeric x, falling back to `index` when x is not a number.
    pub fn x_number(&self, index: usize) -> f64 {
        match &self.x {
            Scalar::Number(n) if n.is_finite() => *n,
            Scalar::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(index as f64),
            _ => index as f64,
        }
    }
}

/// Resolve one record at positional `index`. Total: missing fields get defaults.
pub fn normalize_record(index: usize, record: &Record) -> CanonicalRecord {
    let category = record
        .first_of(&CATEGORY_KEYS)
        .map(Scalar::to_string)
        .unwrap_or_else(|| index.to_string());
    let value = record.first_of(&VALUE_KEYS).map_or(0.0, Scalar::as_number);
    let x = record
        .first_of(&X_KEYS)
        .cloned()
        .unwrap_or(Scalar::Number(index as f64));
    let y = record.first_of(&Y_KEYS).map_or(0.0, Scalar::as_number);
    let series_name = record.first_of(&SERIES_KEYS).map(Scalar::to_string);

    CanonicalRecord { category, value, x, y, series_name }
}

pub fn normalize(records: &[Record]) -> Vec<CanonicalRecord> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| normalize_record(i, r))
        .collect()
}
