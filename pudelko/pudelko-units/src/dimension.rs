//! A length value bound to a unit of measure.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{UnitError, UnitResult};
use crate::round::floor_to;
use crate::unit::UnitOfMeasure;

/// An immutable length tagged with its unit of measure.
///
/// A dimension stores its raw magnitude untouched and derives an
/// *effective* value on every read of [`Dimension::value`], at the
/// precision characteristic of its unit:
///
/// | Unit       | Effective value                    |
/// |------------|------------------------------------|
/// | Meter      | truncated to 3 decimal places      |
/// | Centimeter | truncated to 1 decimal place       |
/// | Millimeter | rounded to the nearest integer     |
///
/// Equality and ordering normalize both operands to millimeters first, so
/// dimensions of different units compare by physical length.
///
/// # Example
///
/// ```
/// use pudelko_units::{Dimension, UnitOfMeasure};
///
/// let a = Dimension::new(1.0, UnitOfMeasure::Meter);
/// let b = Dimension::new(1000.0, UnitOfMeasure::Millimeter);
/// assert_eq!(a, b);
///
/// let truncated = Dimension::new(1.2389, UnitOfMeasure::Meter);
/// assert!((truncated.value() - 1.238).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    raw: f64,
    unit: UnitOfMeasure,
}

impl Dimension {
    /// Create a dimension from a magnitude and its unit.
    ///
    /// The magnitude is stored as given; no validation happens here.
    /// Range enforcement is the concern of the types composing dimensions.
    #[must_use]
    pub const fn new(raw: f64, unit: UnitOfMeasure) -> Self {
        Self { raw, unit }
    }

    /// Create a dimension measured in meters.
    #[must_use]
    pub const fn meters(raw: f64) -> Self {
        Self::new(raw, UnitOfMeasure::Meter)
    }

    /// The raw magnitude as given at construction.
    #[must_use]
    pub const fn raw(&self) -> f64 {
        self.raw
    }

    /// The unit this dimension is measured in.
    #[must_use]
    pub const fn unit(&self) -> UnitOfMeasure {
        self.unit
    }

    /// The effective value: the raw magnitude read at this unit's
    /// characteristic precision.
    ///
    /// Recomputed on every read, never stored.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self.unit {
            UnitOfMeasure::Meter => floor_to(self.raw, 3),
            UnitOfMeasure::Centimeter => floor_to(self.raw, 1),
            UnitOfMeasure::Millimeter => self.raw.round_ties_even(),
        }
    }

    /// Convert to another unit, scaling the *effective* value by the fixed
    /// metric factors.
    ///
    /// Converting to the unit the dimension already has returns an
    /// equivalent copy.
    ///
    /// # Example
    ///
    /// ```
    /// use pudelko_units::{Dimension, UnitOfMeasure};
    ///
    /// let m = Dimension::new(1.0, UnitOfMeasure::Meter);
    /// let mm = m.convert_to(UnitOfMeasure::Millimeter);
    /// assert!((mm.value() - 1000.0).abs() < f64::EPSILON);
    ///
    /// // Round-trips preserve the effective value.
    /// let back = mm.convert_to(UnitOfMeasure::Meter);
    /// assert!((back.value() - 1.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn convert_to(&self, target: UnitOfMeasure) -> Self {
        use UnitOfMeasure::{Centimeter, Meter, Millimeter};

        match (self.unit, target) {
            (Meter, Centimeter) => Self::new(self.value() * 100.0, Centimeter),
            (Meter, Millimeter) => Self::new(self.value() * 1000.0, Millimeter),
            (Centimeter, Meter) => Self::new(self.value() / 100.0, Meter),
            (Centimeter, Millimeter) => Self::new(self.value() * 10.0, Millimeter),
            (Millimeter, Meter) => Self::new(self.value() / 1000.0, Meter),
            (Millimeter, Centimeter) => Self::new(self.value() / 10.0, Centimeter),
            _ => *self,
        }
    }

    /// The effective value normalized to millimeters.
    ///
    /// This is the common axis used for comparison and equality.
    #[must_use]
    pub fn in_millimeters(&self) -> f64 {
        self.value() * self.unit.millimeters_per_unit()
    }

    /// Render with a fixed-precision style.
    ///
    /// The dimension is converted to the style's unit first, then its
    /// effective value is formatted with the style's decimal precision and
    /// unit suffix. The decimal separator is always a point.
    ///
    /// # Example
    ///
    /// ```
    /// use pudelko_units::{Dimension, FormatStyle, UnitOfMeasure};
    ///
    /// let edge = Dimension::new(10.0, UnitOfMeasure::Centimeter);
    /// assert_eq!(edge.render(FormatStyle::Meters), "0.100 m");
    /// assert_eq!(edge.render(FormatStyle::Centimeters), "10.0 cm");
    /// assert_eq!(edge.render(FormatStyle::Millimeters), "100 mm");
    /// ```
    #[must_use]
    pub fn render(&self, style: FormatStyle) -> String {
        match style {
            FormatStyle::Meters => {
                format!("{:.3} m", self.convert_to(UnitOfMeasure::Meter).value())
            }
            FormatStyle::Centimeters => {
                format!("{:.1} cm", self.convert_to(UnitOfMeasure::Centimeter).value())
            }
            FormatStyle::Millimeters => {
                format!("{:.0} mm", self.convert_to(UnitOfMeasure::Millimeter).value())
            }
        }
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.in_millimeters() == other.in_millimeters()
    }
}

impl PartialOrd for Dimension {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.in_millimeters().partial_cmp(&other.in_millimeters())
    }
}

impl fmt::Display for Dimension {
    /// Renders in the default meter style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(FormatStyle::Meters))
    }
}

/// A fixed-precision rendering style for dimensions.
///
/// Each style converts the dimension to its unit and formats the effective
/// value with that unit's characteristic number of decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatStyle {
    /// `"F3" + " m"`: three decimals, meter suffix. The default.
    #[default]
    Meters,
    /// `"F1" + " cm"`: one decimal, centimeter suffix.
    Centimeters,
    /// `"F0" + " mm"`: integral, millimeter suffix.
    Millimeters,
}

impl FormatStyle {
    /// Resolve a format specifier to a style.
    ///
    /// Accepts the unit suffixes `m`, `cm`, and `mm`, their uppercase
    /// forms, and the general specifier `g` as an alias for meters.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::UnknownFormat`] for any other specifier.
    ///
    /// # Example
    ///
    /// ```
    /// use pudelko_units::FormatStyle;
    ///
    /// assert_eq!(FormatStyle::from_specifier("cm").unwrap(), FormatStyle::Centimeters);
    /// assert!(FormatStyle::from_specifier("km").is_err());
    /// ```
    pub fn from_specifier(specifier: &str) -> UnitResult<Self> {
        match specifier.to_ascii_uppercase().as_str() {
            "M" | "G" => Ok(Self::Meters),
            "CM" => Ok(Self::Centimeters),
            "MM" => Ok(Self::Millimeters),
            _ => Err(UnitError::unknown_format(specifier)),
        }
    }
}

impl FromStr for FormatStyle {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_specifier(s)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn meter_value_truncates_to_three_decimals() {
        let d = Dimension::meters(1.2389);
        assert!((d.value() - 1.238).abs() < f64::EPSILON);
    }

    #[test]
    fn centimeter_value_truncates_to_one_decimal() {
        let d = Dimension::new(10.49, UnitOfMeasure::Centimeter);
        assert!((d.value() - 10.4).abs() < f64::EPSILON);
    }

    #[test]
    fn millimeter_value_rounds_half_to_even() {
        assert!((Dimension::new(0.5, UnitOfMeasure::Millimeter).value() - 0.0).abs()
            < f64::EPSILON);
        assert!((Dimension::new(1.5, UnitOfMeasure::Millimeter).value() - 2.0).abs()
            < f64::EPSILON);
        assert!((Dimension::new(1.4, UnitOfMeasure::Millimeter).value() - 1.0).abs()
            < f64::EPSILON);
    }

    #[test]
    fn sub_precision_values_read_as_zero() {
        assert!((Dimension::meters(0.0004).value() - 0.0).abs() < f64::EPSILON);
        assert!((Dimension::new(0.04, UnitOfMeasure::Centimeter).value() - 0.0).abs()
            < f64::EPSILON);
    }

    #[test]
    fn conversion_round_trip() {
        let d = Dimension::meters(1.0)
            .convert_to(UnitOfMeasure::Millimeter)
            .convert_to(UnitOfMeasure::Meter);
        assert_relative_eq!(d.value(), 1.0);
    }

    #[test]
    fn conversion_round_trip_through_centimeters() {
        let d = Dimension::new(37.5, UnitOfMeasure::Centimeter)
            .convert_to(UnitOfMeasure::Meter)
            .convert_to(UnitOfMeasure::Centimeter);
        assert_relative_eq!(d.value(), 37.5);
    }

    #[test]
    fn conversion_to_same_unit_is_identity() {
        let d = Dimension::new(3.7, UnitOfMeasure::Centimeter);
        let same = d.convert_to(UnitOfMeasure::Centimeter);
        assert_eq!(same.unit(), UnitOfMeasure::Centimeter);
        assert!((same.raw() - 3.7).abs() < f64::EPSILON);
    }

    #[test]
    fn conversion_scales_from_effective_value() {
        // 10.49 cm reads as 10.4 cm; the conversion sees 10.4, not 10.49.
        let d = Dimension::new(10.49, UnitOfMeasure::Centimeter);
        let mm = d.convert_to(UnitOfMeasure::Millimeter);
        assert!((mm.value() - 104.0).abs() < f64::EPSILON);
    }

    #[test]
    fn equality_erases_units() {
        let m = Dimension::meters(1.0);
        let cm = Dimension::new(100.0, UnitOfMeasure::Centimeter);
        let mm = Dimension::new(1000.0, UnitOfMeasure::Millimeter);
        assert_eq!(m, cm);
        assert_eq!(m, mm);
        assert_eq!(cm, mm);
    }

    #[test]
    fn ordering_normalizes_units() {
        let small = Dimension::new(5.0, UnitOfMeasure::Centimeter);
        let large = Dimension::meters(1.0);
        assert!(small < large);
        assert!(large > small);
        assert!(small <= Dimension::new(50.0, UnitOfMeasure::Millimeter));
    }

    #[test]
    fn render_styles() {
        let d = Dimension::meters(1.0);
        assert_eq!(d.render(FormatStyle::Meters), "1.000 m");
        assert_eq!(d.render(FormatStyle::Centimeters), "100.0 cm");
        assert_eq!(d.render(FormatStyle::Millimeters), "1000 mm");
    }

    #[test]
    fn display_uses_meter_style() {
        assert_eq!(Dimension::new(25.0, UnitOfMeasure::Millimeter).to_string(), "0.025 m");
    }

    #[test]
    fn specifier_resolution() {
        assert_eq!(FormatStyle::from_specifier("m").unwrap(), FormatStyle::Meters);
        assert_eq!(FormatStyle::from_specifier("G").unwrap(), FormatStyle::Meters);
        assert_eq!(FormatStyle::from_specifier("CM").unwrap(), FormatStyle::Centimeters);
        assert_eq!("mm".parse::<FormatStyle>().unwrap(), FormatStyle::Millimeters);

        let err = FormatStyle::from_specifier("F2").unwrap_err();
        assert_eq!(err, UnitError::UnknownFormat("F2".into()));
    }
}
