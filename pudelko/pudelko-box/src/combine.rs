//! Volume-minimizing box combination.

use tracing::debug;

use crate::error::BoxResult;
use crate::pudelko::Pudelko;

impl Pudelko {
    /// Combine two boxes into the smallest box that fits them placed
    /// end to end.
    ///
    /// For every ordered pairing of an edge of `self` with an edge of
    /// `other`, a candidate is formed whose first edge is the sum of the
    /// paired edges and whose remaining edges take the larger of the
    /// corresponding remaining pair. The candidate with the smallest
    /// volume wins; the nine pairings are scanned in a fixed order
    /// (`self` edge major, `other` edge minor) and ties keep the first
    /// candidate found, so the result is deterministic.
    ///
    /// The arithmetic runs on effective meter values, and the resulting
    /// magnitudes are labeled with the unit of `self`'s first stored edge.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::EdgeOutOfRange`](crate::BoxError::EdgeOutOfRange)
    /// if a winning edge leaves the `(0, 10 m]` range.
    ///
    /// # Example
    ///
    /// ```
    /// use pudelko_box::Pudelko;
    /// use pudelko_units::UnitOfMeasure;
    ///
    /// let p = Pudelko::new(1.0, 1.0, 1.0, UnitOfMeasure::Meter)?;
    /// let q = Pudelko::new(0.5, 0.5, 0.5, UnitOfMeasure::Meter)?;
    ///
    /// let combined = p.combine(&q)?;
    /// assert_eq!(combined, Pudelko::new(1.5, 1.0, 1.0, UnitOfMeasure::Meter)?);
    /// # Ok::<(), pudelko_box::BoxError>(())
    /// ```
    pub fn combine(&self, other: &Self) -> BoxResult<Self> {
        let ours = self.edges_in_meters();
        let theirs = other.edges_in_meters();

        let mut best_volume = f64::INFINITY;
        let mut best_edges = [0.0; 3];
        let mut best_pairing = (0, 0);

        for i in 0..3 {
            for j in 0..3 {
                let edges = [
                    ours[i] + theirs[j],
                    ours[(i + 1) % 3].max(theirs[(j + 1) % 3]),
                    ours[(i + 2) % 3].max(theirs[(j + 2) % 3]),
                ];
                let volume = edges[0] * edges[1] * edges[2];

                if volume < best_volume {
                    best_volume = volume;
                    best_edges = edges;
                    best_pairing = (i, j);
                }
            }
        }

        debug!(
            pairing = ?best_pairing,
            volume = best_volume,
            "selected minimal combination"
        );

        let [a, b, c] = best_edges;
        Self::new(a, b, c, self.dimensions()[0].unit())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use pudelko_units::UnitOfMeasure;

    use super::*;

    fn meters(a: f64, b: f64, c: f64) -> Pudelko {
        Pudelko::new(a, b, c, UnitOfMeasure::Meter).unwrap()
    }

    #[test]
    fn unit_cubes_stack_along_one_axis() {
        let combined = meters(1.0, 1.0, 1.0).combine(&meters(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(combined, meters(2.0, 1.0, 1.0));
        assert_relative_eq!(combined.volume(), 2.0);
    }

    #[test]
    fn smaller_box_nests_against_the_larger() {
        let combined = meters(1.0, 1.0, 1.0)
            .combine(&meters(0.5, 0.5, 0.5))
            .unwrap();
        assert_eq!(combined, meters(1.5, 1.0, 1.0));
        assert_relative_eq!(combined.volume(), 1.5);
    }

    #[test]
    fn scan_finds_the_global_minimum() {
        // Candidate volumes over the 9 pairings range from 0.14 to 0.21;
        // the minimum pairs edge C of the first box with edge A of the
        // second.
        let combined = meters(0.4, 0.5, 0.6)
            .combine(&meters(0.1, 0.2, 0.3))
            .unwrap();
        assert_eq!(combined, meters(0.7, 0.4, 0.5));
        assert_relative_eq!(combined.volume(), 0.14, epsilon = 1e-9);
    }

    #[test]
    fn result_takes_unit_of_first_stored_edge() {
        let p = Pudelko::new(100.0, 100.0, 100.0, UnitOfMeasure::Centimeter).unwrap();
        let combined = p.combine(&p).unwrap();

        // Magnitudes are meter values relabeled as centimeters.
        let dims = combined.dimensions();
        assert_eq!(dims[0].unit(), UnitOfMeasure::Centimeter);
        assert_eq!(
            combined,
            Pudelko::new(2.0, 1.0, 1.0, UnitOfMeasure::Centimeter).unwrap()
        );
    }

    #[test]
    fn combination_can_overflow_the_range() {
        let p = meters(10.0, 10.0, 10.0);
        assert!(p.combine(&p).is_err());
    }

    #[test]
    fn combination_is_deterministic_on_ties() {
        // All 9 candidates of two unit cubes tie at volume 2; the (0, 0)
        // pairing is kept.
        let a = meters(1.0, 1.0, 1.0);
        let first = a.combine(&a).unwrap();
        let second = a.combine(&a).unwrap();
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(first.to_string(), "2.000 m × 1.000 m × 1.000 m");
    }
}
