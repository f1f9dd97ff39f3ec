use crate::curve::Curve;
use crate::error::CurveError;
use crate::interval::{check_finite, check_way_points, reference_index};
use crate::point::Point2;

/// Natural cubic spline interpolation through a set of waypoints.
///
/// The spline is C2-continuous with the natural boundary condition, second
/// derivative zero at both endpoints. The boundary condition is fixed and
/// not configurable.
///
/// Construction solves the standard tridiagonal system for the
/// second-derivative coefficients with the Thomas algorithm (forward
/// elimination over the interval widths, then back substitution), which is
/// O(N). Evaluation is a Horner pass over the containing interval's cubic.
pub struct CubicSplineCurve {
    way_points: Vec<Point2>,
    // one quadratic coefficient per waypoint, linear/cubic per interval
    second_coefficients: Vec<f64>,
    first_coefficients: Vec<f64>,
    third_coefficients: Vec<f64>,
}

impl CubicSplineCurve {
    /// Constructs a natural cubic spline through the given waypoints.
    ///
    /// # Errors
    /// Fails when there are no waypoints or when the waypoint x-coordinates
    /// are not strictly ascending.
    pub fn new(way_points: Vec<Point2>) -> Result<Self, CurveError> {
        check_way_points(&way_points, 1)?;

        let mut spline = CubicSplineCurve {
            second_coefficients: vec![0.0; way_points.len()],
            first_coefficients: vec![0.0; way_points.len().saturating_sub(1)],
            third_coefficients: vec![0.0; way_points.len().saturating_sub(1)],
            way_points,
        };
        if spline.way_points.len() > 1 {
            spline.compute();
        }
        Ok(spline)
    }

    pub fn get_way_points(&self) -> &[Point2] {
        &self.way_points
    }

    fn compute(&mut self) {
        let ways = &self.way_points;
        let way_count = ways.len();

        let widths: Vec<f64> = ways.windows(2).map(|pair| pair[1].x - pair[0].x).collect();

        // right-hand side of the tridiagonal system for the curvatures
        let mut alpha = vec![0.0; way_count];
        for i in 1..way_count - 1 {
            alpha[i] = 3.0
                * ((ways[i + 1].y - ways[i].y) / widths[i]
                    - (ways[i].y - ways[i - 1].y) / widths[i - 1]);
        }

        let mut diagonal = vec![0.0; way_count];
        let mut upper = vec![0.0; way_count];
        let mut solution = vec![0.0; way_count];

        // natural boundary: second derivative zero at both ends
        diagonal[0] = 1.0;
        diagonal[way_count - 1] = 1.0;

        // forward elimination
        for i in 1..way_count - 1 {
            diagonal[i] = 2.0 * (ways[i + 1].x - ways[i - 1].x) - widths[i - 1] * upper[i - 1];
            upper[i] = widths[i] / diagonal[i];
            solution[i] = (alpha[i] - widths[i - 1] * solution[i - 1]) / diagonal[i];
        }

        // back substitution
        self.second_coefficients[way_count - 1] = solution[way_count - 1];
        for i in (0..way_count - 1).rev() {
            self.second_coefficients[i] = solution[i] - upper[i] * self.second_coefficients[i + 1];
            self.first_coefficients[i] = (ways[i + 1].y - ways[i].y) / widths[i]
                - widths[i]
                    * (self.second_coefficients[i + 1] + 2.0 * self.second_coefficients[i])
                    / 3.0;
            self.third_coefficients[i] =
                (self.second_coefficients[i + 1] - self.second_coefficients[i]) / (3.0 * widths[i]);
        }
    }

    fn evaluate(&self, interval_index: usize, x: f64) -> f64 {
        let delta_x = x - self.way_points[interval_index].x;
        ((self.third_coefficients[interval_index] * delta_x
            + self.second_coefficients[interval_index])
            * delta_x
            + self.first_coefficients[interval_index])
            * delta_x
            + self.way_points[interval_index].y
    }
}

impl Curve for CubicSplineCurve {
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

    const EPS: f64 = 1e-6;

    fn ways() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
        ]
    }

    #[test]
    fn passes_through_way_points() {
        let curve = CubicSplineCurve::new(ways()).unwrap();

        assert_approx_eq!(0.0, curve.get_y(0.0).unwrap(), EPS);
        assert_approx_eq!(1.0, curve.get_y(1.0).unwrap(), EPS);
        assert_approx_eq!(0.0, curve.get_y(2.0).unwrap(), EPS);
    }

    #[test]
    fn rising_segment_stays_between_endpoint_values() {
        let curve = CubicSplineCurve::new(ways()).unwrap();

        let y = curve.get_y(0.5).unwrap();
        assert!(y > 0.0 && y < 1.0, "y = {}", y);
    }

    #[test]
    fn natural_boundary_second_derivative_is_zero() {
        let curve = CubicSplineCurve::new(vec![
            Point2::new(0.0, 1.0),
            Point2::new(1.0, -1.0),
            Point2::new(2.5, 0.5),
            Point2::new(4.0, 3.0),
        ])
        .unwrap();

        // central finite difference of the second derivative at both ends
        let h = 1e-4;
        for x in [0.0 + h, 4.0 - h] {
            let second = (curve.get_y(x + h).unwrap() - 2.0 * curve.get_y(x).unwrap()
                + curve.get_y(x - h).unwrap())
                / (h * h);
            assert_approx_eq!(0.0, second, 1e-2);
        }
    }

    #[test]
    fn straight_line_input_stays_linear() {
        let curve = CubicSplineCurve::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 4.0),
            Point2::new(3.0, 6.0),
        ])
        .unwrap();

        assert_approx_eq!(1.0, curve.get_y(0.5).unwrap(), EPS);
        assert_approx_eq!(3.0, curve.get_y(1.5).unwrap(), EPS);
        assert_approx_eq!(5.0, curve.get_y(2.5).unwrap(), EPS);
    }

    #[test]
    fn two_way_points_reduce_to_a_segment() {
        let curve =
            CubicSplineCurve::new(vec![Point2::new(0.0, 0.0), Point2::new(2.0, 4.0)]).unwrap();

        assert_approx_eq!(0.0, curve.get_y(0.0).unwrap(), EPS);
        assert_approx_eq!(2.0, curve.get_y(1.0).unwrap(), EPS);
        assert_approx_eq!(4.0, curve.get_y(2.0).unwrap(), EPS);
    }

    #[test]
    fn single_way_point_is_constant() {
        let curve = CubicSplineCurve::new(vec![Point2::new(1.0, 5.0)]).unwrap();
        assert_approx_eq!(5.0, curve.get_y(42.0).unwrap(), EPS);
    }

    #[test]
    fn unordered_way_points_fail() {
        let curve = CubicSplineCurve::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
        ]);
        assert_eq!(Some(CurveError::UnorderedWayPoints), curve.err());
    }

    #[test]
    fn non_finite_query_fails() {
        let curve = CubicSplineCurve::new(ways()).unwrap();

        assert!(curve.get_y(f64::NAN).is_err());
        assert!(curve.get_y(f64::INFINITY).is_err());
    }

    #[ignore]
    #[test]
    fn performance() {
        use rand::Rng;
        use std::time::Instant;

        let x_min = 0.0;
        let x_max = 6.0;
        let mut rng = rand::thread_rng();

        let way_count = 30;
        let way_step = (x_max - x_min) / way_count as f64;

        let mut ways = Vec::new();
        for i in 0..=way_count {
            let x = x_min + way_step * i as f64;
            ways.push(Point2::new(x, rng.gen_range(0.0..10.0)));
        }

        let curve = CubicSplineCurve::new(ways).unwrap();

        let number_of_points = 300;
        let step = (x_max - x_min) / number_of_points as f64;

        let now = Instant::now();
        for i in 0..=number_of_points {
            let x = x_min + step * i as f64;
            assert!(curve.get_y(x).unwrap() > -10.0);
        }
        let elapsed = now.elapsed();
        println!("get_y time: {:.2?}", elapsed);
    }
}
