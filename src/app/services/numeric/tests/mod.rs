//! Tests for numeric text conversion
//!
//! Expected strings follow what the device C libraries print for the same
//! inputs.

mod format_tests;

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}
