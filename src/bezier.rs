use crate::curve::Curve;
use crate::error::CurveError;
use crate::interval::check_finite;
use crate::point::Point2;

const SEARCH_EPSILON: f64 = 1e-10;
const MAX_SEARCH_ITERATIONS: usize = 100;

/// Bézier curve over a set of control points, evaluated by x-coordinate.
///
/// The curve passes exactly through the first and last control points; the
/// intermediate points shape it without lying on it. Since the Bernstein
/// parameterization is not analytically invertible in x, `get_y` finds the
/// parameter t for a given x with a bounded binary search. This assumes x(t)
/// is monotonic in t, which is the caller's responsibility; x-coordinates of
/// the control points are not required to be ascending.
pub struct BezierCurve {
    control_points: Vec<Point2>,
    degree: usize,
    binomial_coefficients: Vec<f64>,
}

impl BezierCurve {
    /// Constructs a Bézier curve from the given control points.
    ///
    /// # Errors
    /// Fails when fewer than two control points are given.
    pub fn new(control_points: Vec<Point2>) -> Result<Self, CurveError> {
        if control_points.len() < 2 {
            return Err(CurveError::TooFewWayPoints {
                min: 2,
                got: control_points.len(),
            });
        }

        let degree = control_points.len() - 1;
        let binomial_coefficients = (0..=degree)
            .map(|i| binomial_coefficient(degree, i))
            .collect();

        Ok(BezierCurve {
            control_points,
            degree,
            binomial_coefficients,
        })
    }

    pub fn get_control_points(&self) -> &[Point2] {
        &self.control_points
    }

    pub fn get_start_point(&self) -> Point2 {
        self.control_points[0]
    }

    pub fn get_end_point(&self) -> Point2 {
        self.control_points[self.control_points.len() - 1]
    }

    /// Binary-searches the parameter t whose curve x-coordinate matches `x`.
    /// Queries outside the start/end x-range clamp to t = 0 or t = 1.
    fn find_parameter_for_x(&self, x: f64) -> f64 {
        if x <= self.get_start_point().x {
            return 0.0;
        }
        if x >= self.get_end_point().x {
            return 1.0;
        }

        let mut t_min = 0.0;
        let mut t_max = 1.0;

        for _ in 0..MAX_SEARCH_ITERATIONS {
            let t_mid = (t_min + t_max) / 2.0;
            let x_mid = self.evaluate_x(t_mid);

            if (x_mid - x).abs() < SEARCH_EPSILON {
                return t_mid;
            }

            if x_mid < x {
                t_min = t_mid;
            } else {
                t_max = t_mid;
            }
        }

        (t_min + t_max) / 2.0
    }

    fn evaluate_x(&self, t: f64) -> f64 {
        self.bernstein_sum(t, |point| point.x)
    }

    fn evaluate_y(&self, t: f64) -> f64 {
        self.bernstein_sum(t, |point| point.y)
    }

    /// Bernstein-basis weighted sum of one coordinate over the control
    /// points: `Σ C(n,i) * (1-t)^(n-i) * t^i * coordinate(point[i])`.
    fn bernstein_sum(&self, t: f64, coordinate: impl Fn(&Point2) -> f64) -> f64 {
        let one_minus_t = 1.0 - t;

        self.control_points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                self.binomial_coefficients[i]
                    * one_minus_t.powi((self.degree - i) as i32)
                    * t.powi(i as i32)
                    * coordinate(point)
            })
            .sum()
    }
}

impl Curve for BezierCurve {
    fn get_y(&self, x: f64) -> Result<f64, CurveError> {
        check_finite(x)?;

        let t = self.find_parameter_for_x(x);
        Ok(self.evaluate_y(t))
    }
}

/// Binomial coefficient C(n, k) via the multiplicative formula, which stays
/// in f64 range where factorials would overflow.
fn binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }

    let mut result = 1.0;
    for i in 0..k.min(n - k) {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn binomial_coefficients() {
        assert_approx_eq!(1.0, binomial_coefficient(0, 0), EPS);
        assert_approx_eq!(1.0, binomial_coefficient(5, 0), EPS);
        assert_approx_eq!(1.0, binomial_coefficient(5, 5), EPS);
        assert_approx_eq!(10.0, binomial_coefficient(5, 2), EPS);
        assert_approx_eq!(252.0, binomial_coefficient(10, 5), EPS);
        assert_approx_eq!(0.0, binomial_coefficient(3, 4), EPS);
        // would overflow 64-bit factorials
        assert_approx_eq!(1.18264581564861424e17, binomial_coefficient(60, 30), 1e5);
    }

    #[test]
    fn passes_through_first_and_last_control_point() {
        let curve = BezierCurve::new(vec![
            Point2::new(0.0, 1.0),
            Point2::new(0.3, 5.0),
            Point2::new(0.7, -4.0),
            Point2::new(1.0, 2.0),
        ])
        .unwrap();

        // clamping to t = 0 / t = 1 makes the endpoints exact
        assert_eq!(1.0, curve.get_y(0.0).unwrap());
        assert_eq!(2.0, curve.get_y(1.0).unwrap());
    }

    #[test]
    fn clamps_outside_the_x_range() {
        let curve = BezierCurve::new(vec![Point2::new(0.0, 1.0), Point2::new(1.0, 2.0)]).unwrap();

        assert_eq!(1.0, curve.get_y(-5.0).unwrap());
        assert_eq!(2.0, curve.get_y(5.0).unwrap());
    }

    #[test]
    fn linear_control_polygon_is_a_line() {
        let curve = BezierCurve::new(vec![Point2::new(0.0, 0.0), Point2::new(2.0, 4.0)]).unwrap();

        assert_approx_eq!(1.0, curve.get_y(0.5).unwrap(), 1e-8);
        assert_approx_eq!(2.0, curve.get_y(1.0).unwrap(), 1e-8);
        assert_approx_eq!(3.0, curve.get_y(1.5).unwrap(), 1e-8);
    }

    #[test]
    fn quadratic_curve_midpoint() {
        // symmetric quadratic: B(0.5) = 0.25*p0 + 0.5*p1 + 0.25*p2
        let curve = BezierCurve::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        ])
        .unwrap();

        assert_approx_eq!(1.0, curve.get_y(1.0).unwrap(), 1e-8);
    }

    #[test]
    fn fewer_than_two_control_points_fail() {
        assert_eq!(
            Some(CurveError::TooFewWayPoints { min: 2, got: 1 }),
            BezierCurve::new(vec![Point2::new(0.0, 0.0)]).err()
        );
        assert!(BezierCurve::new(Vec::new()).is_err());
    }

    #[test]
    fn non_finite_query_fails() {
        let curve = BezierCurve::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]).unwrap();
        assert!(curve.get_y(f64::NAN).is_err());
    }
}
