//! Decimal-place rounding helpers.

/// Truncate a value toward negative infinity at a number of decimal places.
///
/// # Example
///
/// ```
/// use pudelko_units::floor_to;
///
/// assert!((floor_to(1.2389, 3) - 1.238).abs() < f64::EPSILON);
/// assert!((floor_to(9.99, 1) - 9.9).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn floor_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).floor() / scale
}

/// Round a value half-to-even at a number of decimal places.
///
/// # Example
///
/// ```
/// use pudelko_units::round_to;
///
/// assert!((round_to(1.23456, 3) - 1.235).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_truncates() {
        assert!((floor_to(1.9999, 3) - 1.999).abs() < f64::EPSILON);
        assert!((floor_to(0.0004, 3) - 0.0).abs() < f64::EPSILON);
        assert!((floor_to(10.05, 1) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn floor_keeps_exact_values() {
        assert!((floor_to(0.015, 3) - 0.015).abs() < f64::EPSILON);
        assert!((floor_to(2.5, 1) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn round_half_to_even() {
        assert!((round_to(0.5, 0) - 0.0).abs() < f64::EPSILON);
        assert!((round_to(1.5, 0) - 2.0).abs() < f64::EPSILON);
        assert!((round_to(2.5, 0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn round_at_decimals() {
        assert!((round_to(0.123_456_789_4, 9) - 0.123_456_789).abs() < 1e-15);
        assert!((round_to(52.000_000_4, 6) - 52.0).abs() < 1e-9);
    }
}
