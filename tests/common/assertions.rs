//! Assertion utilities for testing.
//!
//! Floating-point comparisons and checks on temperature summaries.

#![allow(dead_code)]

use serde_json::Value;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a temperature summary object is ordered `min <= avg <= max`,
/// or entirely null.
pub fn assert_stats_consistent(stats: &Value) {
    let min = &stats["Minimum Temperature"];
    let max = &stats["Maximum Temperature"];
    let avg = &stats["Average Temperature"];

    if min.is_null() || max.is_null() || avg.is_null() {
        assert!(
            min.is_null() && max.is_null() && avg.is_null(),
            "Partially null temperature summary: {}",
            stats
        );
        return;
    }

    let (min, max, avg) = (
        min.as_f64().unwrap(),
        max.as_f64().unwrap(),
        avg.as_f64().unwrap(),
    );
    assert!(
        min <= avg && avg <= max,
        "Temperature summary out of order: min = {}, avg = {}, max = {}",
        min,
        avg,
        max
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(67.5, 67.5000000001, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_stats_consistent() {
        assert_stats_consistent(&serde_json::json!({
            "Minimum Temperature": 64.0,
            "Maximum Temperature": 72.0,
            "Average Temperature": 67.5
        }));
        assert_stats_consistent(&serde_json::json!({
            "Minimum Temperature": null,
            "Maximum Temperature": null,
            "Average Temperature": null
        }));
    }
}
