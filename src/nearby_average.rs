use crate::curve::Curve;
use crate::error::CurveError;
use crate::interval::{check_finite, check_way_points, reference_index};
use crate::point::Point2;

/// Averaging interpolation over nearby waypoints.
///
/// Queries at or beyond the range extremes return the boundary waypoint's y.
/// A query landing exactly on an interior waypoint averages it with both
/// neighbors (or the single neighbor at an array edge); anything else
/// averages the two endpoints of the containing interval.
pub struct NearbyAverageCurve {
    way_points: Vec<Point2>,
}

impl NearbyAverageCurve {
    /// Constructs a nearby-average curve over the given waypoints.
    ///
    /// # Errors
    /// Fails when there are no waypoints or when the waypoint x-coordinates
    /// are not strictly ascending.
    pub fn new(way_points: Vec<Point2>) -> Result<Self, CurveError> {
        check_way_points(&way_points, 1)?;
        Ok(NearbyAverageCurve { way_points })
    }

    pub fn get_way_points(&self) -> &[Point2] {
        &self.way_points
    }

    fn evaluate(&self, reference_index: usize, x: f64) -> f64 {
        let ways = &self.way_points;
        let way_count = ways.len();

        if x <= ways[0].x {
            return ways[0].y;
        }
        if x >= ways[way_count - 1].x {
            return ways[way_count - 1].y;
        }
        if ways[reference_index].x == x {
            if reference_index > 0 && way_count > reference_index + 1 {
                return (ways[reference_index + 1].y
                    + ways[reference_index].y
                    + ways[reference_index - 1].y)
                    / 3.0;
            } else if reference_index > 0 {
                return (ways[reference_index - 1].y + ways[reference_index].y) / 2.0;
            }
            return (ways[reference_index + 1].y + ways[reference_index].y) / 2.0;
        }
        if way_count > reference_index + 1 {
            return (ways[reference_index + 1].y + ways[reference_index].y) / 2.0;
        }
        ways[reference_index].y
    }
}

impl Curve for NearbyAverageCurve {
    fn get_y(&self, x: f64) -> Result<f64, CurveError> {
        check_finite(x)?;

        if self.way_points.len() == 1 {
            return Ok(self.way_points[0].y);
        }
        let reference_index = reference_index(&self.way_points, x);
        Ok(self.evaluate(reference_index, x))
    }
}
