//! Parsing boxes from their rendered text form.

use core::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use pudelko_units::{Dimension, UnitOfMeasure};

use crate::error::{BoxError, BoxResult};
use crate::pudelko::Pudelko;

/// The separator between rendered edges: space, multiplication sign,
/// space.
const SEPARATOR: &str = " \u{d7} ";

fn compiled(pattern: &str) -> Regex {
    // Token patterns are literals; failing to compile one is a
    // programming error, not an input error.
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(_) => unreachable!(),
    }
}

fn meter_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compiled(r"^(\d{1,2}\.\d{3})\s?m$"))
}

fn centimeter_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compiled(r"^(\d{1,4}\.\d)\s?cm$"))
}

fn millimeter_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compiled(r"^(\d{1,5})\s?mm$"))
}

impl Pudelko {
    /// Parse a box from its rendered text form.
    ///
    /// The input must hold exactly three `"value unit"` tokens joined by
    /// `" × "`. Each token carries its unit's literal shape: meters as
    /// `D{1,2}.DDD m`, centimeters as `D{1,4}.D cm`, millimeters as a
    /// plain integer `D{1,5} mm`. Units may be mixed freely across the
    /// three tokens; the decimal separator is always a point. Parsed
    /// edges are converted to meters and run through the validated
    /// constructor in parse order.
    ///
    /// # Errors
    ///
    /// - [`BoxError::EmptyInput`] for empty text.
    /// - [`BoxError::TokenCount`] when the separator does not yield three
    ///   tokens.
    /// - [`BoxError::MalformedToken`] when a token matches no unit shape.
    /// - [`BoxError::EdgeOutOfRange`] when a parsed edge fails validation.
    ///
    /// # Example
    ///
    /// ```
    /// use pudelko_box::Pudelko;
    ///
    /// let p = Pudelko::parse("1.000 m × 1.0 cm × 1 mm")?;
    /// assert_eq!(p.to_string(), "1.000 m × 0.010 m × 0.001 m");
    /// # Ok::<(), pudelko_box::BoxError>(())
    /// ```
    pub fn parse(text: &str) -> BoxResult<Self> {
        if text.is_empty() {
            return Err(BoxError::EmptyInput);
        }

        let tokens: Vec<&str> = text.split(SEPARATOR).collect();
        if tokens.len() != 3 {
            return Err(BoxError::TokenCount(tokens.len()));
        }

        let a = parse_token(tokens[0])?;
        let b = parse_token(tokens[1])?;
        let c = parse_token(tokens[2])?;

        Self::from_dimensions([
            a.convert_to(UnitOfMeasure::Meter),
            b.convert_to(UnitOfMeasure::Meter),
            c.convert_to(UnitOfMeasure::Meter),
        ])
    }
}

impl FromStr for Pudelko {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_token(token: &str) -> BoxResult<Dimension> {
    let (captures, unit) = if let Some(captures) = meter_token().captures(token) {
        (captures, UnitOfMeasure::Meter)
    } else if let Some(captures) = centimeter_token().captures(token) {
        (captures, UnitOfMeasure::Centimeter)
    } else if let Some(captures) = millimeter_token().captures(token) {
        (captures, UnitOfMeasure::Millimeter)
    } else {
        return Err(BoxError::MalformedToken(token.to_owned()));
    };

    let literal = &captures[1];
    let magnitude: f64 = literal
        .parse()
        .map_err(|_| BoxError::MalformedToken(token.to_owned()))?;

    trace!(token, magnitude, unit = %unit, "parsed dimension token");
    Ok(Dimension::new(magnitude, unit))
}
