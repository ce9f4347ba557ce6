//! Float assertions.
//!
//! Table reads must hand back exactly what was published, so the default
//! comparison here is bitwise. `assert_approx_eq` exists for values that
//! went through arithmetic on the test side.

/// Assert two `f64`s are bit-identical.
///
/// # Panics
///
/// Panics if the bit patterns differ.
#[track_caller]
pub fn assert_same_f64(actual: f64, expected: f64) {
    assert!(
        actual.to_bits() == expected.to_bits(),
        "expected {expected:?} (bits {:#018x}), got {actual:?} (bits {:#018x})",
        expected.to_bits(),
        actual.to_bits()
    );
}

/// Assert two `f64`s are within `tolerance` of each other.
///
/// # Panics
///
/// Panics if the difference exceeds `tolerance` or either side is NaN.
#[track_caller]
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {expected} ± {tolerance}, got {actual} (diff {diff})"
    );
}
