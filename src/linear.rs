use crate::curve::Curve;
use crate::error::CurveError;
use crate::interval::{check_finite, check_way_points, reference_index};
use crate::point::Point2;

/// Piecewise-linear interpolation through a set of waypoints.
///
/// One slope per segment is precomputed at construction; evaluation is a
/// binary search for the containing segment followed by a single
/// multiply-add.
pub struct LinearCurve {
    way_points: Vec<Point2>,
    slopes: Vec<f64>,
}

impl LinearCurve {
    /// Constructs a composite linear curve through the given waypoints.
    ///
    /// # Errors
    /// Fails when there are no waypoints or when the waypoint x-coordinates
    /// are not strictly ascending.
    pub fn new(way_points: Vec<Point2>) -> Result<Self, CurveError> {
        check_way_points(&way_points, 1)?;

        let slopes = way_points
            .windows(2)
            .map(|pair| (pair[1].y - pair[0].y) / (pair[1].x - pair[0].x))
            .collect();

        Ok(LinearCurve { way_points, slopes })
    }

    pub fn get_way_points(&self) -> &[Point2] {
        &self.way_points
    }

    fn evaluate(&self, interval_index: usize, x: f64) -> f64 {
        let delta_x = x - self.way_points[interval_index].x;
        self.way_points[interval_index].y + self.slopes[interval_index] * delta_x
    }
}

impl Curve for LinearCurve {
    fn get_y(&self, x: f64) -> Result<f64, CurveError> {
        check_finite(x)?;

        if self.way_points.len() == 1 {
            return Ok(self.way_points[0].y);
        }
        let interval_index = reference_index(&self.way_points, x);
        Ok(self.evaluate(interval_index, x))
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn passes_through_way_points() {
        let ways = vec![
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(3.0, -1.0),
        ];
        let curve = LinearCurve::new(ways.clone()).unwrap();

        for way in &ways {
            assert_approx_eq!(way.y, curve.get_y(way.x).unwrap(), EPS);
        }
    }

    #[test]
    fn secant_slope_matches_segment_slope() {
        let curve = LinearCurve::new(vec![
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(3.0, -1.0),
        ])
        .unwrap();

        // slope of the first segment is 2, of the second -2
        let secant = (curve.get_y(0.75).unwrap() - curve.get_y(0.25).unwrap()) / 0.5;
        assert_approx_eq!(2.0, secant, EPS);

        let secant = (curve.get_y(2.5).unwrap() - curve.get_y(1.5).unwrap()) / 1.0;
        assert_approx_eq!(-2.0, secant, EPS);
    }

    #[test]
    fn clamps_to_boundary_segments() {
        let curve = LinearCurve::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 2.0),
        ])
        .unwrap();

        // queries outside the range extrapolate along the boundary segments
        assert_approx_eq!(-2.0, curve.get_y(-1.0).unwrap(), EPS);
        assert_approx_eq!(2.0, curve.get_y(5.0).unwrap(), EPS);
    }

    #[test]
    fn single_way_point_is_constant() {
        let curve = LinearCurve::new(vec![Point2::new(2.0, 7.0)]).unwrap();

        assert_approx_eq!(7.0, curve.get_y(-100.0).unwrap(), EPS);
        assert_approx_eq!(7.0, curve.get_y(2.0).unwrap(), EPS);
        assert_approx_eq!(7.0, curve.get_y(100.0).unwrap(), EPS);
    }

    #[test]
    fn unordered_way_points_fail() {
        let curve = LinearCurve::new(vec![Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)]);
        assert_eq!(Some(CurveError::UnorderedWayPoints), curve.err());
    }

    #[test]
    fn empty_way_points_fail() {
        assert!(LinearCurve::new(Vec::new()).is_err());
    }

    #[test]
    fn non_finite_query_fails() {
        let curve = LinearCurve::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]).unwrap();

        assert!(curve.get_y(f64::NAN).is_err());
        assert!(curve.get_y(f64::INFINITY).is_err());
        assert!(curve.get_y(f64::NEG_INFINITY).is_err());
    }
}
