use crate::stats::{Summary, summarize};
use pretty_assertions::assert_eq;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn empty_list_has_no_summary() {
    assert_eq!(summarize(&[]), None);
}

#[test]
fn constant_samples() {
    let summary = summarize(&[10.0, 10.0, 10.0, 10.0]).unwrap();

    assert_eq!(
        summary,
        Summary {
            count: 4,
            mean: 10.0,
            stddev: 0.0,
            min: 10.0,
            max: 10.0,
            p95: 10.0,
        }
    );
}

#[test]
fn one_to_ten() {
    let samples: Vec<f64> = (1..=10).map(f64::from).collect();

    let summary = summarize(&samples).unwrap();

    assert_eq!(summary.count, 10);
    assert_close(summary.mean, 5.5);
    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.max, 10.0);
    // floor(0.95 * 10) = 9 -> tenth smallest
    assert_eq!(summary.p95, 10.0);
}

#[test]
fn stddev_is_population_not_sample() {
    // population variance of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 4
    let summary = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();

    assert_close(summary.mean, 5.0);
    assert_close(summary.stddev, 2.0);
}

#[test]
fn unsorted_input_is_sorted_privately() {
    let samples = vec![9.0, 1.0, 5.0, 3.0];

    let summary = summarize(&samples).unwrap();

    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.max, 9.0);
    assert_eq!(samples, vec![9.0, 1.0, 5.0, 3.0]);
}

#[test]
fn p95_of_hundred_samples_is_ninety_sixth_smallest() {
    let samples: Vec<f64> = (1..=100).rev().map(f64::from).collect();

    let summary = summarize(&samples).unwrap();

    assert_eq!(summary.p95, 96.0);
}

#[test]
fn p95_uses_truncating_index() {
    // floor(0.95 * 19) = 18 -> largest; floor(0.95 * 21) = 19 -> second largest
    let nineteen: Vec<f64> = (1..=19).map(f64::from).collect();
    let twenty_one: Vec<f64> = (1..=21).map(f64::from).collect();

    assert_eq!(summarize(&nineteen).unwrap().p95, 19.0);
    assert_eq!(summarize(&twenty_one).unwrap().p95, 20.0);
}

#[test]
fn single_sample() {
    let summary = summarize(&[3.25]).unwrap();

    assert_eq!(summary.count, 1);
    assert_eq!(summary.min, 3.25);
    assert_eq!(summary.max, 3.25);
    assert_eq!(summary.p95, 3.25);
    assert_eq!(summary.stddev, 0.0);
}

#[test]
fn bounds_hold_for_assorted_lists() {
    let lists: [&[f64]; 8] = [
        &[0.0],
        &[0.1, 0.1, 0.1],
        &[1e308, 1e308],
        &[1e308, 1.5e308],
        &[1.5, 2.5],
        &[100.0, 0.001, 42.0, 42.0, 7.0],
        &[-5.0, 5.0],
        &[1e9, 1e-9, 3.0],
    ];

    for list in lists {
        let s = summarize(list).unwrap();

        assert!(s.min <= s.mean && s.mean <= s.max, "{list:?}: {s:?}");
        assert!(s.stddev >= 0.0, "{list:?}: {s:?}");
        assert!(s.min <= s.p95 && s.p95 <= s.max, "{list:?}: {s:?}");
        assert_eq!(s.count, list.len());
    }
}

#[test]
fn repeated_inexact_values_have_exact_mean() {
    let summary = summarize(&[0.1; 3]).unwrap();

    assert_eq!(summary.mean, 0.1);
    assert_eq!(summary.stddev, 0.0);
}

#[test]
fn huge_durations_do_not_overflow() {
    let summary = summarize(&[1e308, 1e308, 1.5e308]).unwrap();

    assert!(summary.mean.is_finite());
    assert!(summary.stddev.is_finite());
    assert!(summary.mean >= 1e308 && summary.mean <= 1.5e308);
}
