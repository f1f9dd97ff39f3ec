use crate::curve::Curve;
use crate::error::CurveError;
use crate::interval::check_finite;
use crate::point::Point2;

/// Exponentiation curve: `y = start.y + (x - start.x)^amount`.
pub struct ExpoCurve {
    start_point: Point2,
    amount: f64,
}

impl ExpoCurve {
    /// Constructs an exponentiation curve from a start point and exponent.
    ///
    /// # Errors
    /// Fails when `amount` is zero.
    pub fn new(start_point: Point2, amount: f64) -> Result<Self, CurveError> {
        if amount == 0.0 {
            return Err(CurveError::ZeroExponentiation);
        }
        Ok(ExpoCurve { start_point, amount })
    }

    pub fn get_start_point(&self) -> Point2 {
        self.start_point
    }

    pub fn get_amount(&self) -> f64 {
        self.amount
    }
}

impl Curve for ExpoCurve {
    fn get_y(&self, x: f64) -> Result<f64, CurveError> {
        check_finite(x)?;

        Ok(self.start_point.y + (x - self.start_point.x).powf(self.amount))
    }
}
