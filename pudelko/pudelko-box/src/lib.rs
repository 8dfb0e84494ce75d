//! Validated immutable boxes with unit-aware edges.
//!
//! This crate provides [`Pudelko`], a rectangular box described by three
//! unit-tagged edges, together with:
//!
//! - **Validated construction**: every edge must lie in `(0, 10 m]`,
//!   checked at its unit's precision; construction is all-or-nothing
//! - **Permutation-invariant equality**: boxes equal up to reordering of
//!   their edges compare and hash equal
//! - **Derived metrics**: volume and surface area, recomputed from
//!   effective meter values on every read
//! - **Combination**: [`Pudelko::combine`] joins two boxes into the
//!   smallest box fitting them end to end
//! - **Text round-trip**: [`Pudelko::parse`] reads the rendered
//!   `"A × B × C"` form back
//! - **Sorting**: [`volume_area_edges_ordering`] for collections
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be
//! used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//!
//! # Example
//!
//! ```
//! use pudelko_box::{Pudelko, volume_area_edges_ordering};
//! use pudelko_units::UnitOfMeasure;
//!
//! let p = Pudelko::new(10.0, 15.0, 20.0, UnitOfMeasure::Centimeter)?;
//! let q = Pudelko::new(100.0, 150.0, 200.0, UnitOfMeasure::Millimeter)?;
//!
//! // Units normalize away in comparisons.
//! assert_eq!(p, q);
//!
//! // Rendering and parsing are inverses for canonical forms.
//! let round_tripped = Pudelko::parse(&p.to_string())?;
//! assert_eq!(round_tripped, p);
//!
//! let mut boxes = vec![p, Pudelko::default()];
//! boxes.sort_by(volume_area_edges_ordering);
//! assert_eq!(boxes[0], Pudelko::default());
//! # Ok::<(), pudelko_box::BoxError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod combine;
mod compress;
mod error;
mod parse;
mod pudelko;
mod sort;

// Re-export main types and functions
pub use error::{BoxError, BoxResult};
pub use pudelko::{Pudelko, PudelkoBuilder};
pub use sort::volume_area_edges_ordering;

// Re-export the dimension types boxes are built from
pub use pudelko_units::{Dimension, FormatStyle, UnitOfMeasure};

// Re-export nalgebra types for convenience
pub use nalgebra::Vector3;
