use crate::curve::Curve;
use crate::error::CurveError;
use crate::interval::{check_finite, check_way_points, reference_index};
use crate::point::{Point2, WayPoint};

/// Cubic Hermite interpolation through waypoints with optional tangents.
///
/// Tangents given by the caller are respected; missing tangents are filled
/// in eagerly at construction using finite differences (forward at the first
/// point, backward at the last, central elsewhere). After construction every
/// waypoint carries a concrete tangent and the curve is never mutated again.
pub struct CubicHermiteCurve {
    way_points: Vec<WayPoint>,
    // per-interval cubic and quadratic coefficients; the linear coefficient
    // is the start tangent's y-component and the constant term the start y
    third_coefficients: Vec<f64>,
    quad_coefficients: Vec<f64>,
}

impl CubicHermiteCurve {
    /// Constructs a cubic Hermite curve through the given waypoints.
    ///
    /// # Errors
    /// Fails when there are no waypoints or when the waypoint x-coordinates
    /// are not strictly ascending.
    pub fn new(way_points: Vec<WayPoint>) -> Result<Self, CurveError> {
        check_way_points(&way_points, 1)?;

        let mut curve = CubicHermiteCurve {
            third_coefficients: vec![0.0; way_points.len().saturating_sub(1)],
            quad_coefficients: vec![0.0; way_points.len().saturating_sub(1)],
            way_points,
        };
        curve.fill_tangents();
        curve.compute();
        Ok(curve)
    }

    /// The waypoints of the curve with all tangents resolved.
    pub fn get_way_points(&self) -> &[WayPoint] {
        &self.way_points
    }

    fn fill_tangents(&mut self) {
        for index in 0..self.way_points.len() {
            if self.way_points[index].tangent.is_none() {
                self.way_points[index].tangent = Some(self.finite_difference_tangent(index));
            }
        }
    }

    fn finite_difference_tangent(&self, index: usize) -> Point2 {
        let way_count = self.way_points.len();

        if way_count == 1 {
            // single point, horizontal tangent
            return Point2::new(1.0, 0.0);
        }

        let (i, i2) = if index == 0 {
            (0, 1)
        } else if index + 1 == way_count {
            (way_count - 2, way_count - 1)
        } else {
            (index - 1, index + 1)
        };

        let p0 = self.way_points[i].pos;
        let p1 = self.way_points[i2].pos;
        Point2::new(1.0, (p1.y - p0.y) / (p1.x - p0.x))
    }

    fn compute(&mut self) {
        for i in 0..self.way_points.len().saturating_sub(1) {
            let p0 = self.way_points[i].pos;
            let p1 = self.way_points[i + 1].pos;
            // tangents are all filled by now
            let m0 = self.way_points[i].tangent.unwrap_or(Point2::new(1.0, 0.0));
            let m1 = self.way_points[i + 1].tangent.unwrap_or(Point2::new(1.0, 0.0));

            let delta_x = p1.x - p0.x;

            // a = (2p0 + m0*dx - 2p1 + m1*dx) / dx^3
            self.third_coefficients[i] = (2.0 * p0.y + m0.y * delta_x - 2.0 * p1.y + m1.y * delta_x)
                / (delta_x * delta_x * delta_x);
            // b = (-3p0 - 2m0*dx + 3p1 - m1*dx) / dx^2
            self.quad_coefficients[i] = (-3.0 * p0.y - 2.0 * m0.y * delta_x + 3.0 * p1.y
                - m1.y * delta_x)
                / (delta_x * delta_x);
        }
    }

    fn evaluate(&self, interval_index: usize, x: f64) -> f64 {
        let way = &self.way_points[interval_index];
        let delta_x = x - way.pos.x;
        let tangent_y = way.tangent.map(|t| t.y).unwrap_or(0.0);

        ((self.third_coefficients[interval_index] * delta_x
            + self.quad_coefficients[interval_index])
            * delta_x
            + tangent_y)
            * delta_x
            + way.pos.y
    }
}

impl Curve for CubicHermiteCurve {
    fn get_y(&self, x: f64) -> Result<f64, CurveError> {
        check_finite(x)?;

        if self.way_points.len() == 1 {
            return Ok(self.way_points[0].pos.y);
        }
        let interval_index = reference_index(&self.way_points, x);
        Ok(self.evaluate(interval_index, x))
    }
}
