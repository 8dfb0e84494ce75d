//! Error types for box construction, access, and parsing.

use pudelko_units::{UnitError, UnitOfMeasure};
use thiserror::Error;

/// Result type alias for box operations.
pub type BoxResult<T> = Result<T, BoxError>;

/// Errors that can occur when constructing, indexing, or parsing boxes.
///
/// # Example
///
/// ```
/// use pudelko_box::{Pudelko, BoxError};
/// use pudelko_units::UnitOfMeasure;
///
/// let err = Pudelko::new(11.0, 1.0, 1.0, UnitOfMeasure::Meter).unwrap_err();
/// assert!(matches!(err, BoxError::EdgeOutOfRange { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BoxError {
    /// An edge fell outside the allowed range.
    ///
    /// Every edge must read as strictly positive at its unit's precision
    /// and must not exceed 10 meters.
    #[error("edge of {value} {unit} is outside the (0, 10 m] range")]
    EdgeOutOfRange {
        /// The offending magnitude, as given at construction.
        value: f64,
        /// The unit the magnitude was given in.
        unit: UnitOfMeasure,
    },

    /// An edge index outside `0..=2`.
    #[error("edge index {0} is out of range (expected 0, 1, or 2)")]
    EdgeIndex(usize),

    /// Empty input text handed to the parser.
    #[error("cannot parse a box from empty input")]
    EmptyInput,

    /// Input text that did not split into exactly three dimension tokens.
    #[error("expected 3 dimension tokens, found {0}")]
    TokenCount(usize),

    /// A token that matches none of the dimension patterns.
    #[error("token `{0}` matches no dimension pattern")]
    MalformedToken(String),

    /// A format specifier the renderer does not recognize.
    #[error(transparent)]
    Format(#[from] UnitError),
}
