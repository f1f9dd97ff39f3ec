use crate::curve::Curve;
use crate::error::CurveError;
use crate::interval::{check_finite, check_way_points, reference_index};
use crate::point::Point2;

const WEIGHT_THRESHOLD: f64 = 1e-10;

/// Modified Akima interpolation through a set of waypoints.
///
/// Derivatives at the waypoints are weighted averages of the adjacent
/// segment slopes, which damps the oscillations a plain cubic spline shows
/// near outliers. When the weights nearly cancel the derivative falls back
/// to the simple slope average to avoid dividing by a near-zero sum.
pub struct ModifiedAkimaCurve {
    way_points: Vec<Point2>,
    derivatives: Vec<f64>,
}

impl ModifiedAkimaCurve {
    /// Constructs a Modified Akima curve through the given waypoints.
    ///
    /// # Errors
    /// Fails when there are no waypoints or when the waypoint x-coordinates
    /// are not strictly ascending.
    pub fn new(way_points: Vec<Point2>) -> Result<Self, CurveError> {
        check_way_points(&way_points, 1)?;

        let mut curve = ModifiedAkimaCurve {
            derivatives: vec![0.0; way_points.len()],
            way_points,
        };
        curve.compute();
        Ok(curve)
    }

    pub fn get_way_points(&self) -> &[Point2] {
        &self.way_points
    }

    fn compute(&mut self) {
        let ways = &self.way_points;
        let n = ways.len();

        if n == 1 {
            self.derivatives[0] = 0.0;
            return;
        }
        if n == 2 {
            let slope = (ways[1].y - ways[0].y) / (ways[1].x - ways[0].x);
            self.derivatives[0] = slope;
            self.derivatives[1] = slope;
            return;
        }

        // segment slopes at indices 2..=n, padded with two extrapolated
        // slopes on each boundary
        let mut slopes = vec![0.0; n + 3];
        for i in 2..n + 1 {
            slopes[i] = (ways[i - 1].y - ways[i - 2].y) / (ways[i - 1].x - ways[i - 2].x);
        }
        slopes[0] = 2.0 * slopes[2] - slopes[3];
        slopes[1] = 2.0 * slopes[2] - slopes[3];
        slopes[n + 1] = 2.0 * slopes[n] - slopes[n - 1];
        slopes[n + 2] = 2.0 * slopes[n] - slopes[n - 1];

        for i in 0..n {
            let w1 = (slopes[i + 3] - slopes[i + 2]).abs();
            let w2 = (slopes[i + 1] - slopes[i]).abs();

            self.derivatives[i] = if w1 + w2 < WEIGHT_THRESHOLD {
                0.5 * (slopes[i + 1] + slopes[i + 2])
            } else {
                (w1 * slopes[i + 1] + w2 * slopes[i + 2]) / (w1 + w2)
            };
        }
    }

    fn evaluate(&self, interval_index: usize, x: f64) -> f64 {
        let p0 = self.way_points[interval_index];
        let p1 = self.way_points[interval_index + 1];

        let h = p1.x - p0.x;
        let t = (x - p0.x) / h;

        let t2 = t * t;
        let t3 = t2 * t;

        // cubic Hermite basis
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        h00 * p0.y
            + h10 * h * self.derivatives[interval_index]
            + h01 * p1.y
            + h11 * h * self.derivatives[interval_index + 1]
    }
}

impl Curve for ModifiedAkimaCurve {
    fn get_y(&self, x: f64) -> Result<f64, CurveError> {
        check_finite(x)?;

        if self.way_points.len() == 1 {
            return Ok(self.way_points[0].y);
        }
        let interval_index = reference_index(&self.way_points, x);
        Ok(self.evaluate(interval_index, x))
    }
}
