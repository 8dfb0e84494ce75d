//! The validated box type.

use core::fmt;
use core::hash::{Hash, Hasher};

use nalgebra::Vector3;
use pudelko_units::{Dimension, FormatStyle, UnitOfMeasure};

use crate::error::{BoxError, BoxResult};

/// The largest edge any box may carry.
const MAX_EDGE: Dimension = Dimension::new(10.0, UnitOfMeasure::Meter);

/// The edge used when a builder leaves one unspecified.
const DEFAULT_EDGE: Dimension = Dimension::new(10.0, UnitOfMeasure::Centimeter);

/// An immutable rectangular box with three unit-tagged edges.
///
/// Every constructor validates each edge against the open-lower,
/// closed-upper range `(0, 10 m]`, read at the edge's own precision and
/// compared on the millimeter-normalized axis. Construction is
/// all-or-nothing; no instance with an invalid edge ever exists.
///
/// Equality is **permutation-invariant**: two boxes are equal when their
/// edges match under some reordering, because the orientation of a box is
/// not observable. Hashing canonicalizes the same way, so equal boxes hash
/// identically.
///
/// # Example
///
/// ```
/// use pudelko_box::Pudelko;
/// use pudelko_units::UnitOfMeasure;
///
/// let p = Pudelko::new(2.0, 3.0, 4.0, UnitOfMeasure::Meter)?;
/// assert!((p.volume() - 24.0).abs() < 1e-9);
/// assert!((p.area() - 52.0).abs() < 1e-6);
///
/// // Orientation does not matter.
/// let q = Pudelko::new(4.0, 2.0, 3.0, UnitOfMeasure::Meter)?;
/// assert_eq!(p, q);
/// # Ok::<(), pudelko_box::BoxError>(())
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[Dimension; 3]", try_from = "[Dimension; 3]")
)]
pub struct Pudelko {
    edges: [Dimension; 3],
}

impl Pudelko {
    /// Create a box from three magnitudes sharing one unit.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::EdgeOutOfRange`] if any edge reads as
    /// non-positive at its unit's precision or exceeds 10 meters.
    ///
    /// # Example
    ///
    /// ```
    /// use pudelko_box::Pudelko;
    /// use pudelko_units::UnitOfMeasure;
    ///
    /// let p = Pudelko::new(10.0, 15.0, 20.0, UnitOfMeasure::Centimeter)?;
    /// assert!((p.volume() - 0.003).abs() < 1e-9);
    ///
    /// assert!(Pudelko::new(11.0, 1.0, 1.0, UnitOfMeasure::Meter).is_err());
    /// # Ok::<(), pudelko_box::BoxError>(())
    /// ```
    pub fn new(a: f64, b: f64, c: f64, unit: UnitOfMeasure) -> BoxResult<Self> {
        Self::from_dimensions([
            Dimension::new(a, unit),
            Dimension::new(b, unit),
            Dimension::new(c, unit),
        ])
    }

    /// Create a box from three already-built dimensions.
    ///
    /// The dimensions may carry different units; each is validated in
    /// place and stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::EdgeOutOfRange`] if any dimension is out of
    /// range.
    pub fn from_dimensions(edges: [Dimension; 3]) -> BoxResult<Self> {
        for edge in edges {
            validate_edge(edge)?;
        }
        Ok(Self { edges })
    }

    /// Create a box from three whole-millimeter edges.
    ///
    /// Named replacement for treating an integer triple as a millimeter
    /// box.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::EdgeOutOfRange`] if any edge is zero or longer
    /// than 10 meters.
    ///
    /// # Example
    ///
    /// ```
    /// use pudelko_box::Pudelko;
    ///
    /// let p = Pudelko::from_millimeter_triple(100, 150, 200)?;
    /// assert_eq!(p.to_string(), "0.100 m × 0.150 m × 0.200 m");
    /// # Ok::<(), pudelko_box::BoxError>(())
    /// ```
    pub fn from_millimeter_triple(a: u32, b: u32, c: u32) -> BoxResult<Self> {
        Self::new(
            f64::from(a),
            f64::from(b),
            f64::from(c),
            UnitOfMeasure::Millimeter,
        )
    }

    /// Start building a box edge by edge.
    ///
    /// Unset edges default to 10 cm, converted into the requested unit.
    ///
    /// # Example
    ///
    /// ```
    /// use pudelko_box::Pudelko;
    /// use pudelko_units::UnitOfMeasure;
    ///
    /// let p = Pudelko::builder()
    ///     .with_a(2.5)
    ///     .with_unit(UnitOfMeasure::Meter)
    ///     .build()?;
    /// assert_eq!(p.to_string(), "2.500 m × 0.100 m × 0.100 m");
    /// # Ok::<(), pudelko_box::BoxError>(())
    /// ```
    #[must_use]
    pub fn builder() -> PudelkoBuilder {
        PudelkoBuilder::default()
    }

    /// Edge A, converted to meters.
    #[must_use]
    pub fn a(&self) -> Dimension {
        self.edges[0].convert_to(UnitOfMeasure::Meter)
    }

    /// Edge B, converted to meters.
    #[must_use]
    pub fn b(&self) -> Dimension {
        self.edges[1].convert_to(UnitOfMeasure::Meter)
    }

    /// Edge C, converted to meters.
    #[must_use]
    pub fn c(&self) -> Dimension {
        self.edges[2].convert_to(UnitOfMeasure::Meter)
    }

    /// The edge at an index (0, 1, 2 for A, B, C), as its effective value
    /// in meters.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::EdgeIndex`] for indices above 2.
    pub fn edge(&self, index: usize) -> BoxResult<f64> {
        match index {
            0 => Ok(self.a().value()),
            1 => Ok(self.b().value()),
            2 => Ok(self.c().value()),
            _ => Err(BoxError::EdgeIndex(index)),
        }
    }

    /// The three effective edge values in meters, in A, B, C order.
    #[must_use]
    pub fn edges_in_meters(&self) -> [f64; 3] {
        [self.a().value(), self.b().value(), self.c().value()]
    }

    /// The edges as a vector of meter values, for geometric interop.
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        let [a, b, c] = self.edges_in_meters();
        Vector3::new(a, b, c)
    }

    /// Iterate over the three effective meter edge values.
    ///
    /// The iteration restarts from edge A on every call.
    pub fn iter(&self) -> core::array::IntoIter<f64, 3> {
        self.edges_in_meters().into_iter()
    }

    /// The box volume in cubic meters, rounded at 9 decimal places.
    ///
    /// Recomputed from the effective meter edge values on every call.
    #[must_use]
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.edges_in_meters();
        pudelko_units::round_to(a * b * c, 9)
    }

    /// The total surface area in square meters, rounded at 6 decimal
    /// places.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.edges_in_meters();
        pudelko_units::round_to(2.0 * (a * b) + 2.0 * (a * c) + 2.0 * (b * c), 6)
    }

    /// Render all three edges with one style, joined by `" × "`.
    ///
    /// # Example
    ///
    /// ```
    /// use pudelko_box::Pudelko;
    /// use pudelko_units::FormatStyle;
    ///
    /// let cube = Pudelko::default();
    /// assert_eq!(cube.render(FormatStyle::Centimeters), "10.0 cm × 10.0 cm × 10.0 cm");
    /// assert_eq!(cube.render(FormatStyle::Millimeters), "100 mm × 100 mm × 100 mm");
    /// ```
    #[must_use]
    pub fn render(&self, style: FormatStyle) -> String {
        format!(
            "{} × {} × {}",
            self.a().render(style),
            self.b().render(style),
            self.c().render(style)
        )
    }

    /// Render with a textual format specifier (`"m"`, `"cm"`, `"mm"`, or
    /// the general `"g"`).
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::Format`] for an unrecognized specifier.
    pub fn render_with(&self, specifier: &str) -> BoxResult<String> {
        let style = FormatStyle::from_specifier(specifier)?;
        Ok(self.render(style))
    }

    /// The stored edges, in A, B, C order and their original units.
    #[must_use]
    pub const fn dimensions(&self) -> [Dimension; 3] {
        self.edges
    }

    /// The millimeter-normalized edge values, sorted ascending.
    ///
    /// This is the canonical form equality and hashing agree on.
    fn sorted_millimeters(&self) -> [f64; 3] {
        let mut mm = [
            self.edges[0].in_millimeters(),
            self.edges[1].in_millimeters(),
            self.edges[2].in_millimeters(),
        ];
        mm.sort_by(f64::total_cmp);
        mm
    }
}

fn validate_edge(edge: Dimension) -> BoxResult<()> {
    if edge.value() > 0.0 && edge <= MAX_EDGE {
        Ok(())
    } else {
        Err(BoxError::EdgeOutOfRange {
            value: edge.raw(),
            unit: edge.unit(),
        })
    }
}

impl Default for Pudelko {
    /// The 10 × 10 × 10 cm cube.
    fn default() -> Self {
        Self {
            edges: [DEFAULT_EDGE; 3],
        }
    }
}

impl PartialEq for Pudelko {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_millimeters() == other.sorted_millimeters()
    }
}

// Validated edges are finite and positive, so equality is reflexive.
impl Eq for Pudelko {}

impl Hash for Pudelko {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for mm in self.sorted_millimeters() {
            mm.to_bits().hash(state);
        }
    }
}

impl fmt::Display for Pudelko {
    /// Renders in the default meter style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(FormatStyle::Meters))
    }
}

impl TryFrom<[Dimension; 3]> for Pudelko {
    type Error = BoxError;

    fn try_from(edges: [Dimension; 3]) -> BoxResult<Self> {
        Self::from_dimensions(edges)
    }
}

impl From<Pudelko> for [Dimension; 3] {
    fn from(p: Pudelko) -> Self {
        p.dimensions()
    }
}

impl<'a> IntoIterator for &'a Pudelko {
    type Item = f64;
    type IntoIter = core::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Edge-by-edge builder for [`Pudelko`].
///
/// Edges left unset default to 10 cm converted into the builder's unit;
/// the unit defaults to meters.
#[derive(Debug, Clone, Copy, Default)]
pub struct PudelkoBuilder {
    a: Option<f64>,
    b: Option<f64>,
    c: Option<f64>,
    unit: UnitOfMeasure,
}

impl PudelkoBuilder {
    /// Sets edge A.
    #[must_use]
    pub const fn with_a(mut self, a: f64) -> Self {
        self.a = Some(a);
        self
    }

    /// Sets edge B.
    #[must_use]
    pub const fn with_b(mut self, b: f64) -> Self {
        self.b = Some(b);
        self
    }

    /// Sets edge C.
    #[must_use]
    pub const fn with_c(mut self, c: f64) -> Self {
        self.c = Some(c);
        self
    }

    /// Sets the unit shared by all given edges.
    #[must_use]
    pub const fn with_unit(mut self, unit: UnitOfMeasure) -> Self {
        self.unit = unit;
        self
    }

    /// Build the validated box.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::EdgeOutOfRange`] if any resolved edge is out of
    /// range.
    pub fn build(self) -> BoxResult<Pudelko> {
        let resolve = |magnitude: Option<f64>| match magnitude {
            Some(value) => Dimension::new(value, self.unit),
            None => DEFAULT_EDGE.convert_to(self.unit),
        };
        Pudelko::from_dimensions([resolve(self.a), resolve(self.b), resolve(self.c)])
    }
}
