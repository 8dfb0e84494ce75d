//! Unit-tagged metric length dimensions.
//!
//! This crate provides the foundational types for unit-aware length
//! handling:
//!
//! - [`UnitOfMeasure`] - Meter, centimeter, or millimeter
//! - [`Dimension`] - An immutable length bound to one unit
//! - [`FormatStyle`] - Fixed-precision rendering styles
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be
//! used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//!
//! # Effective Values
//!
//! A [`Dimension`] stores its raw `f64` magnitude untouched and derives an
//! *effective* value on every read, at the precision characteristic of its
//! unit: meters truncate to 3 decimal places, centimeters to 1, and
//! millimeters round to the nearest integer. Comparison and equality
//! normalize both operands to millimeters first, so a 1 m dimension equals
//! a 1000 mm one.
//!
//! # Example
//!
//! ```
//! use pudelko_units::{Dimension, UnitOfMeasure};
//!
//! let edge = Dimension::new(2.5, UnitOfMeasure::Centimeter);
//! assert_eq!(edge.to_string(), "0.025 m");
//!
//! let in_mm = edge.convert_to(UnitOfMeasure::Millimeter);
//! assert_eq!(in_mm, edge);
//! assert!((in_mm.value() - 25.0).abs() < f64::EPSILON);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod dimension;
mod error;
mod round;
mod unit;

// Re-export core types
pub use dimension::{Dimension, FormatStyle};
pub use error::{UnitError, UnitResult};
pub use round::{floor_to, round_to};
pub use unit::UnitOfMeasure;
