//! Error types for unit handling.

use thiserror::Error;

/// Result type alias for unit operations.
pub type UnitResult<T> = Result<T, UnitError>;

/// Errors that can occur when working with units and format styles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum UnitError {
    /// A format specifier that names no known rendering style.
    #[error("the `{0}` format specifier is not supported")]
    UnknownFormat(String),
}

impl UnitError {
    /// Create an unknown-format error.
    #[must_use]
    pub fn unknown_format(specifier: impl Into<String>) -> Self {
        Self::UnknownFormat(specifier.into())
    }
}
