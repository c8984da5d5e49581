/// Tolerance used when matching a rate against the speed presets.
pub const RATE_EPSILON: f64 = 0.001;

/// Floating-point comparison tolerant of rounding error.
///
/// Uses absolute error when either side is zero or the difference is below
/// the smallest normal magnitude, and relative error otherwise. NaN never
/// compares nearly equal to anything, including itself.
pub fn nearly_equal(a: f64, b: f64, epsilon: f64) -> bool {
    let abs_a = a.abs();
    let abs_b = b.abs();
    let diff = (a - b).abs();

    if a == b {
        // also covers matching infinities
        true
    } else if a == 0.0 || b == 0.0 || diff < f64::MIN_POSITIVE {
        diff < epsilon * f64::MIN_POSITIVE
    } else {
        diff / (abs_a + abs_b).min(f64::MAX) < epsilon
    }
}
