// File: crates/foundry-core/tests/stats.rs
// Purpose: Summary statistics over resolved values.

use foundry_core::stats::summarize_values;
use foundry_core::{normalize, summarize, Record};

#[test]
fn summary_of_three_values() {
    let records: Vec<Record> = [10, 20, 30].iter().map(|&v| Record::new().with("value", v)).collect();
    let s = summarize(&normalize(&records));
    assert_eq!(s.count, 3);
    assert_eq!(s.sum, 60.0);
    assert_eq!(s.avg, Some(20.0));
    assert_eq!(s.min, Some(10.0));
    assert_eq!(s.max, Some(30.0));
}

#[test]
fn empty_summary_has_no_average() {
    let s = summarize(&[]);
    assert!(s.is_empty());
    assert_eq!(s.sum, 0.0);
    assert_eq!((s.avg, s.min, s.max), (None, None, None));
    assert_eq!(s.to_string(), "no data");
}

#[test]
fn negative_values_and_single_value() {
    let s = summarize_values([-4.0, 2.0]);
    assert_eq!(s.min, Some(-4.0));
    assert_eq!(s.avg, Some(-1.0));
    let one = summarize_values([7.5]);
    assert_eq!((one.min, one.max, one.avg), (Some(7.5), Some(7.5), Some(7.5)));
}

#[test]
fn mean_of_huge_values_stays_finite() {
    let s = summarize_values([f64::MAX, f64::MAX, f64::MAX]);
    assert!(s.sum.is_infinite());
    assert_eq!(s.avg, Some(f64::MAX));
    assert_eq!(s.max, Some(f64::MAX));
}
