// File: crates/foundry-core/src/stats.rs
// Summary: count/sum/avg/min/max over resolved values for overlays and the analytics panel.

use std::fmt;

use serde::Serialize;

use crate::normalize::CanonicalRecord;

/// Summary statistics; `avg`, `min` and `max` are `None` when there is no data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub avg: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Summary {
    pub fn is_empty(&self) -> bool { self.count == 0 }
}

pub fn summarize(records: &[CanonicalRecord]) -> Summary {
    summarize_values(records.iter().map(|r| r.value))
}

/// The average is a running mean, so it stays finite for finite inputs even
/// when `sum` overflows.
pub fn summarize_values<I: IntoIterator<Item = f64>>(values: I) -> Summary {
    let mut count = 0usize;
    let mut sum = 0.0f64;
    let mut mean = 0.0f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        count += 1;
        sum += v;
        mean += (v - mean) / count as f64;
        min = min.min(v);
        max = max.max(v);
    }
    if count == 0 {
        return Summary { count, sum, avg: None, min: None, max: None };
    }
    Summary { count, sum, avg: Some(mean), min: Some(min), max: Some(max) }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.avg, self.min, self.max) {
            (Some(avg), Some(min), Some(max)) => write!(
                f,
                "count={} sum={} avg={:.4} min={} max={}",
                self.count, self.sum, avg, min, max
            ),
            _ => f.write_str("no data"),
        }
    }
}
