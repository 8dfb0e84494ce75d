//! Metric units of measure.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A metric unit of length.
///
/// The set is closed: 1 m = 100 cm = 1000 mm, with no sub-units.
///
/// # Example
///
/// ```
/// use pudelko_units::UnitOfMeasure;
///
/// assert_eq!(UnitOfMeasure::Centimeter.suffix(), "cm");
/// assert!((UnitOfMeasure::Meter.millimeters_per_unit() - 1000.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitOfMeasure {
    /// Meters.
    #[default]
    Meter,
    /// Centimeters (1e-2 m).
    Centimeter,
    /// Millimeters (1e-3 m).
    Millimeter,
}

impl UnitOfMeasure {
    /// The textual suffix rendered after a value in this unit.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
        }
    }

    /// How many millimeters one whole unit spans.
    ///
    /// This is the scale used to normalize dimensions of different units
    /// onto a common axis for comparison.
    #[must_use]
    pub const fn millimeters_per_unit(self) -> f64 {
        match self {
            Self::Meter => 1000.0,
            Self::Centimeter => 10.0,
            Self::Millimeter => 1.0,
        }
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes() {
        assert_eq!(UnitOfMeasure::Meter.suffix(), "m");
        assert_eq!(UnitOfMeasure::Centimeter.suffix(), "cm");
        assert_eq!(UnitOfMeasure::Millimeter.suffix(), "mm");
    }

    #[test]
    fn normalization_scales() {
        assert!((UnitOfMeasure::Meter.millimeters_per_unit() - 1000.0).abs() < f64::EPSILON);
        assert!((UnitOfMeasure::Centimeter.millimeters_per_unit() - 10.0).abs() < f64::EPSILON);
        assert!((UnitOfMeasure::Millimeter.millimeters_per_unit() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_is_meter() {
        assert_eq!(UnitOfMeasure::default(), UnitOfMeasure::Meter);
    }

    #[test]
    fn display_matches_suffix() {
        assert_eq!(UnitOfMeasure::Millimeter.to_string(), "mm");
    }
}
