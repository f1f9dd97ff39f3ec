use crate::curve::Curve;
use crate::error::CurveError;
use crate::interval::{check_finite, check_way_points};
use crate::point::Point2;

const EPSILON: f64 = 1e-10;
const DEFAULT_POWER: f64 = 3.3;

/// Inverse-distance-weighted interpolation over all waypoints.
///
/// Every query is a weighted average of every waypoint's y, with weights
/// `1 / |xi - x|^power`, so evaluation is O(N) and no interval lookup takes
/// place. A query within `1e-10` of a waypoint returns that waypoint's y
/// directly. The weighting exponent defaults to 3.3 and can be set with
/// [BarycentricCurve::with_power].
///
/// Deprecated: the piecewise curves interpolate more predictably; this is
/// retained for compatibility.
#[deprecated(note = "prefer one of the piecewise interpolation curves")]
pub struct BarycentricCurve {
    way_points: Vec<Point2>,
    power: f64,
}

#[allow(deprecated)]
impl BarycentricCurve {
    /// Constructs a barycentric curve with the default weighting exponent.
    ///
    /// # Errors
    /// Fails when there are no waypoints or when the waypoint x-coordinates
    /// are not strictly ascending.
    pub fn new(way_points: Vec<Point2>) -> Result<Self, CurveError> {
        Self::with_power(way_points, DEFAULT_POWER)
    }

    /// Constructs a barycentric curve with an explicit weighting exponent.
    pub fn with_power(way_points: Vec<Point2>, power: f64) -> Result<Self, CurveError> {
        check_way_points(&way_points, 1)?;
        Ok(BarycentricCurve { way_points, power })
    }

    pub fn get_way_points(&self) -> &[Point2] {
        &self.way_points
    }

    pub fn get_power(&self) -> f64 {
        self.power
    }

    fn evaluate(&self, x: f64) -> f64 {
        let mut weight_sum = 0.0;
        let mut weighted_sum = 0.0;

        for way in &self.way_points {
            let abs_delta_x = (way.x - x).abs();

            if abs_delta_x < EPSILON {
                return way.y;
            }

            let weight = 1.0 / abs_delta_x.powf(self.power);
            weight_sum += weight;
            weighted_sum += weight * way.y;
        }

        weighted_sum / weight_sum
    }
}

#[allow(deprecated)]
impl Curve for BarycentricCurve {
    fn get_y(&self, x: f64) -> Result<f64, CurveError> {
        check_finite(x)?;

        if self.way_points.len() == 1 {
            return Ok(self.way_points[0].y);
        }
        Ok(self.evaluate(x))
    }
}
