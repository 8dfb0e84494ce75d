//! Compressing a box into a volume-preserving cube.

use pudelko_units::{floor_to, UnitOfMeasure};

use crate::error::BoxResult;
use crate::pudelko::Pudelko;

impl Pudelko {
    /// Derive the cube whose edge is the cube root of this box's volume,
    /// truncated to millimeter precision.
    ///
    /// # Errors
    ///
    /// Returns [`BoxError::EdgeOutOfRange`](crate::BoxError::EdgeOutOfRange)
    /// if the truncated edge reads as zero.
    ///
    /// # Example
    ///
    /// ```
    /// use pudelko_box::Pudelko;
    /// use pudelko_units::UnitOfMeasure;
    ///
    /// let p = Pudelko::new(1.0, 2.0, 3.0, UnitOfMeasure::Meter)?;
    /// let cube = p.compress()?;
    /// assert_eq!(cube.to_string(), "1.817 m × 1.817 m × 1.817 m");
    /// # Ok::<(), pudelko_box::BoxError>(())
    /// ```
    pub fn compress(&self) -> BoxResult<Self> {
        let edge = floor_to(self.volume().cbrt(), 3);
        Self::new(edge, edge, edge, UnitOfMeasure::Meter)
    }
}
