use crate::curve::Curve;
use crate::error::CurveError;
use crate::interval::{check_finite, check_way_points, reference_index};
use crate::point::Point2;

/// Nearest-neighbor interpolation: every query returns the y of the
/// waypoint closest in x. Midpoint ties resolve to the left waypoint.
pub struct NearestCurve {
    way_points: Vec<Point2>,
}

impl NearestCurve {
    /// Constructs a nearest-neighbor curve over the given waypoints.
    ///
    /// # Errors
    /// Fails when there are no waypoints or when the waypoint x-coordinates
    /// are not strictly ascending.
    pub fn new(way_points: Vec<Point2>) -> Result<Self, CurveError> {
        check_way_points(&way_points, 1)?;
        Ok(NearestCurve { way_points })
    }

    pub fn get_way_points(&self) -> &[Point2] {
        &self.way_points
    }

    fn evaluate(&self, interval_index: usize, x: f64) -> f64 {
        let delta_x = x - self.way_points[interval_index].x;
        // strict comparison keeps ties on the left endpoint
        if self.way_points[interval_index + 1].x - x < delta_x {
            self.way_points[interval_index + 1].y
        } else {
            self.way_points[interval_index].y
        }
    }
}

impl Curve for NearestCurve {
    fn get_y(&self, x: f64) -> Result<f64, CurveError> {
        check_finite(x)?;

        if self.way_points.len() == 1 {
            return Ok(self.way_points[0].y);
        }
        let interval_index = reference_index(&self.way_points, x);
        Ok(self.evaluate(interval_index, x))
    }
}
