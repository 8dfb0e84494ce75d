//! Ordering helpers for collections of boxes.

use core::cmp::Ordering;

use crate::pudelko::Pudelko;

/// Order boxes ascending by volume, then area, then the sum of their
/// meter edge values.
///
/// The comparison is total (every pair of boxes orders), so it can be
/// handed to `sort_by` directly.
///
/// # Example
///
/// ```
/// use pudelko_box::{volume_area_edges_ordering, Pudelko};
/// use pudelko_units::UnitOfMeasure;
///
/// let mut boxes = vec![
///     Pudelko::new(2.0, 2.0, 2.0, UnitOfMeasure::Meter)?,
///     Pudelko::default(),
/// ];
/// boxes.sort_by(volume_area_edges_ordering);
/// assert_eq!(boxes[0], Pudelko::default());
/// # Ok::<(), pudelko_box::BoxError>(())
/// ```
#[must_use]
pub fn volume_area_edges_ordering(p1: &Pudelko, p2: &Pudelko) -> Ordering {
    p1.volume()
        .total_cmp(&p2.volume())
        .then_with(|| p1.area().total_cmp(&p2.area()))
        .then_with(|| edge_sum(p1).total_cmp(&edge_sum(p2)))
}

fn edge_sum(p: &Pudelko) -> f64 {
    p.edges_in_meters().iter().sum()
}
