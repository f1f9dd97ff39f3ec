use crate::akima::ModifiedAkimaCurve;
use crate::bezier::BezierCurve;
use crate::cubic_spline::CubicSplineCurve;
use crate::error::CurveError;
use crate::linear::LinearCurve;
use crate::nearby_average::NearbyAverageCurve;
use crate::nearest::NearestCurve;
use crate::point::Point2;

/// Mutable accumulator for waypoints, feeding the immutable curve
/// constructors.
///
/// Purely a convenience for collecting points one by one; validation and
/// coefficient computation happen in the curve constructor the finishing
/// call hands the points to.
///
/// ```
/// use curve_interp::{Curve, WayPointsBuilder};
///
/// let curve = WayPointsBuilder::new()
///     .point(0.0, 0.0)
///     .point(1.0, 2.0)
///     .point(2.0, 1.0)
///     .cubic_spline()
///     .unwrap();
///
/// assert_eq!(2.0, curve.get_y(1.0).unwrap());
/// ```
#[derive(Default)]
pub struct WayPointsBuilder {
    points: Vec<Point2>,
}

impl WayPointsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a waypoint. Points must be added in ascending x order for the
    /// waypoint-based curves; the finishing constructor checks this.
    pub fn point(mut self, x: f64, y: f64) -> Self {
        self.points.push(Point2::new(x, y));
        self
    }

    /// Replaces the accumulated points wholesale.
    pub fn points(mut self, points: Vec<Point2>) -> Self {
        self.points = points;
        self
    }

    pub fn linear(self) -> Result<LinearCurve, CurveError> {
        LinearCurve::new(self.points)
    }

    pub fn cubic_spline(self) -> Result<CubicSplineCurve, CurveError> {
        CubicSplineCurve::new(self.points)
    }

    pub fn modified_akima(self) -> Result<ModifiedAkimaCurve, CurveError> {
        ModifiedAkimaCurve::new(self.points)
    }

    pub fn bezier(self) -> Result<BezierCurve, CurveError> {
        BezierCurve::new(self.points)
    }

    pub fn nearest(self) -> Result<NearestCurve, CurveError> {
        NearestCurve::new(self.points)
    }

    pub fn nearby_average(self) -> Result<NearbyAverageCurve, CurveError> {
        NearbyAverageCurve::new(self.points)
    }
}
