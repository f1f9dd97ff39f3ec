/// A single sample on a curve, given as an (x, y) coordinate pair.
///
/// Points are plain immutable data; curves copy them at construction and
/// never alias caller-owned storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }
}

/// A waypoint for cubic Hermite interpolation: a position plus an optional
/// tangent vector. A missing tangent is computed via finite differences when
/// the curve is constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WayPoint {
    pub pos: Point2,
    pub tangent: Option<Point2>,
}

impl WayPoint {
    pub fn new(pos: Point2, tangent: Option<Point2>) -> Self {
        WayPoint { pos, tangent }
    }

    /// Waypoint without an explicit tangent.
    pub fn free(x: f64, y: f64) -> Self {
        WayPoint { pos: Point2::new(x, y), tangent: None }
    }

    /// Waypoint with a fixed tangent vector.
    pub fn fixed(x: f64, y: f64, tangent: Point2) -> Self {
        WayPoint { pos: Point2::new(x, y), tangent: Some(tangent) }
    }
}
