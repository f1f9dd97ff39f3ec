//! Library of one-dimensional curve interpolation algorithms and animation
//! easing functions.
//!
//! Each curve maps an x-coordinate to a y-coordinate given an ordered set of
//! waypoints or control points. Curves validate their input and precompute
//! all coefficients at construction and are immutable afterwards; repeated
//! [Curve::get_y] calls only look up the containing interval and evaluate
//! the precomputed piece.
//!
//! # Example
//! ```
//! use assert_approx_eq::assert_approx_eq;
//! use curve_interp::{Curve, CubicSplineCurve, Point2};
//!
//! let curve = CubicSplineCurve::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(2.0, 0.0),
//! ]).unwrap();
//!
//! assert_approx_eq!(1.0, curve.get_y(1.0).unwrap(), 1e-9);
//! ```

mod akima;
mod barycentric;
mod bezier;
mod builder;
mod cubic_spline;
mod curve;
mod error;
mod expo;
mod hermite;
mod interval;
mod linear;
mod nearby_average;
mod nearest;
mod point;

pub mod easing;

pub use akima::ModifiedAkimaCurve;
#[allow(deprecated)]
pub use barycentric::BarycentricCurve;
pub use bezier::BezierCurve;
pub use builder::WayPointsBuilder;
pub use cubic_spline::CubicSplineCurve;
pub use curve::Curve;
pub use error::CurveError;
pub use expo::ExpoCurve;
pub use hermite::CubicHermiteCurve;
pub use linear::LinearCurve;
pub use nearby_average::NearbyAverageCurve;
pub use nearest::NearestCurve;
pub use point::{Point2, WayPoint};
