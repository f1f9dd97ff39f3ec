use crate::error::CurveError;
use crate::point::{Point2, WayPoint};

/// Access to the x-coordinate of a waypoint-like element, so the interval
/// search and the ordering check work over both plain points and Hermite
/// waypoints.
pub(crate) trait XCoord {
    fn x_coord(&self) -> f64;
}

impl XCoord for Point2 {
    fn x_coord(&self) -> f64 {
        self.x
    }
}

impl XCoord for WayPoint {
    fn x_coord(&self) -> f64 {
        self.pos.x
    }
}

/// Finds the index `i` of the interval such that
/// `ways[i].x <= x < ways[i + 1].x` by binary search.
///
/// Out-of-range queries clamp: `x <= ways[0].x` returns 0 and
/// `x >= ways[n - 1].x` returns `n - 2`. The midpoint is biased toward the
/// right half so the loop terminates with inclusive-left semantics.
///
/// Callers must guarantee `ways.len() >= 2`; curves with a single waypoint
/// short-circuit before searching.
pub(crate) fn reference_index<T: XCoord>(ways: &[T], x: f64) -> usize {
    let way_count = ways.len();
    let mut left = 0;
    let mut right = way_count - 2;

    if x <= ways[0].x_coord() {
        return left;
    }
    if x >= ways[way_count - 1].x_coord() {
        return right;
    }

    while left < right {
        let mid = (left + right + 1) / 2;
        if ways[mid].x_coord() <= x {
            left = mid;
        } else {
            right = mid - 1;
        }
    }

    left
}

/// Checks the construction invariant shared by all waypoint-based curves:
/// at least `min` waypoints, x strictly ascending, no duplicates.
pub(crate) fn check_way_points<T: XCoord>(ways: &[T], min: usize) -> Result<(), CurveError> {
    if ways.len() < min {
        return Err(CurveError::TooFewWayPoints { min, got: ways.len() });
    }
    for pair in ways.windows(2) {
        if pair[0].x_coord() >= pair[1].x_coord() {
            return Err(CurveError::UnorderedWayPoints);
        }
    }
    Ok(())
}

/// Rejects NaN and infinite query coordinates.
pub(crate) fn check_finite(x: f64) -> Result<(), CurveError> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(CurveError::NonFiniteInput(x))
    }
}
