use crate::error::CurveError;

/// A mathematical curve mapping an x-coordinate to a y-coordinate.
///
/// Every interpolation algorithm in this crate implements this trait, so
/// callers can hold a `Box<dyn Curve>` and swap algorithms freely. All
/// implementations are immutable after construction and therefore safe to
/// share between threads for read-only use.
pub trait Curve {
    /// Calculates the y-coordinate of the curve for the given x-coordinate.
    ///
    /// # Errors
    /// Returns [CurveError::NonFiniteInput](crate::CurveError::NonFiniteInput)
    /// when `x` is NaN or infinite.
    fn get_y(&self, x: f64) -> Result<f64, CurveError>;
}
