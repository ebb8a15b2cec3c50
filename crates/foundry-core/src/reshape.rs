// File: crates/foundry-core/src/reshape.rs
// Summary: One-time reshape that synthesizes fields a chart variant needs but the dataset lacks.
// Notes:
// - Only missing fields are added; existing fields are never overwritten.
// - Applying the same reshape twice yields the output of applying it once.

use crate::dataset::{Dataset, Record, Scalar};
use crate::normalize::{CATEGORY_KEYS, VALUE_KEYS};
use crate::variant::{ChartVariant, RequiredShape};

/// Fields to add to `record` (at positional `index`) so it satisfies `shape`.
fn missing_fields(shape: RequiredShape, index: usize, record: &Record) -> Vec<(&'static str, Scalar)> {
    let has_label = CATEGORY_KEYS.iter().any(|k| record.contains(k));
    match shape {
        RequiredShape::Categorical | RequiredShape::Named if !has_label => {
            vec![("name", Scalar::Text(format!("Item {}", index + 1)))]
        }
        RequiredShape::Dimensional if !has_label => {
            vec![("name", Scalar::Text(format!("Dimension {}", index + 1)))]
        }
        RequiredShape::Paired => {
            let mut out = Vec::new();
            if !record.contains("x") {
                out.push(("x", Scalar::Number(index as f64)));
            }
            if !record.contains("y") {
                let value = record.first_of(&VALUE_KEYS).map_or(0.0, Scalar::as_number);
                out.push(("y", Scalar::Number(value)));
            }
            out
        }
        _ => Vec::new(),
    }
}

/// True when no record would change under `reshape(dataset, variant)`.
pub fn satisfies(dataset: &Dataset, variant: ChartVariant) -> bool {
    let shape = variant.required_shape();
    dataset
        .iter()
        .enumerate()
        .all(|(i, r)| missing_fields(shape, i, r).is_empty())
}

/// Return a dataset that satisfies `variant`'s required shape.
pub fn reshape(dataset: &Dataset, variant: ChartVariant) -> Dataset {
    let shape = variant.required_shape();
    let mut synthesized = 0usize;
    let records = dataset
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let missing = missing_fields(shape, i, record);
            if missing.is_empty() {
                return record.clone();
            }
            synthesized += 1;
            missing
                .into_iter()
                .fold(record.clone(), |acc, (key, value)| acc.with(key, value))
        })
        .collect::<Vec<_>>();

    if synthesized > 0 {
        log::debug!("reshape for {variant}: synthesized fields on {synthesized} of {} records", records.len());
    }
    Dataset::new(records)
}
