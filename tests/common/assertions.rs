//! Assertion utilities for testing.
//!
//! Floating-point comparisons for aggregated temperatures, which come back
//! from SQLite's AVG with rounding noise.

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

/// Assert that a JSON stats payload satisfies `min <= avg <= max`.
///
/// # Panics
///
/// Panics if any statistic is missing or they are out of order.
pub fn assert_ordered_stats(json: &serde_json::Value) {
    let min = json["min_temp"].as_f64().expect("min_temp missing");
    let avg = json["avg_temp"].as_f64().expect("avg_temp missing");
    let max = json["max_temp"].as_f64().expect("max_temp missing");

    assert!(
        min <= avg && avg <= max,
        "Stats out of order: min = {}, avg = {}, max = {}",
        min,
        avg,
        max
    );
}
