//! Hull predicates and measures: membership, convexity, area, verification.
//!
//! All predicates are exact sign tests on `orient::turn`; no tolerance is applied.

use super::orient::{orientation, turn};
use super::types::{lex_cmp, HullError, Orientation, Point};

/// True if `p` lies inside or on the boundary of the CCW hull.
///
/// Degenerate hulls: a 1-vertex hull contains only that point; a 2-vertex hull
/// contains the closed segment.
pub fn contains(hull: &[Point], p: Point) -> bool {
    match hull.len() {
        0 => false,
        1 => hull[0] == p,
        2 => {
            let (a, b) = (hull[0], hull[1]);
            if turn(a, b, p) != 0.0 {
                return false;
            }
            let d = b - a;
            let t = (p - a).dot(&d);
            t >= 0.0 && t <= d.dot(&d)
        }
        n => (0..n).all(|k| turn(hull[k], hull[(k + 1) % n], p) >= 0.0),
    }
}

/// True if every cyclic triple of consecutive vertices turns counter-clockwise.
///
/// Hulls with fewer than 3 vertices are convex when their vertices are distinct.
pub fn is_convex_ccw(hull: &[Point]) -> bool {
    first_non_convex(hull).is_none()
}

fn first_non_convex(hull: &[Point]) -> Option<usize> {
    let n = hull.len();
    if n < 3 {
        return (n == 2 && hull[0] == hull[1]).then_some(0);
    }
    (0..n).find(|&k| {
        orientation(hull[k], hull[(k + 1) % n], hull[(k + 2) % n])
            != Orientation::CounterClockwise
    })
}

/// Shoelace area; positive for counter-clockwise vertex order.
pub fn signed_area(hull: &[Point]) -> f64 {
    let n = hull.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|k| {
            let (p, q) = (hull[k], hull[(k + 1) % n]);
            p.x * q.y - p.y * q.x
        })
        .sum();
    0.5 * twice
}

/// Length of the closed boundary (twice the length for a segment).
pub fn perimeter(hull: &[Point]) -> f64 {
    let n = hull.len();
    if n < 2 {
        return 0.0;
    }
    (0..n).map(|k| (hull[(k + 1) % n] - hull[k]).norm()).sum()
}

/// Checks that `hull` is the convex hull of `points`: every vertex is an input point,
/// the boundary is strictly convex and counter-clockwise, and no input point lies
/// outside.
///
/// Cost O(n·h); intended for diagnostics and tests.
pub fn verify_hull(points: &[Point], hull: &[Point]) -> Result<(), HullError> {
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_by(lex_cmp);
    for (k, v) in hull.iter().enumerate() {
        if sorted.binary_search_by(|p| lex_cmp(p, v)).is_err() {
            return Err(HullError::ForeignVertex { index: k });
        }
    }
    if let Some(k) = first_non_convex(hull) {
        return Err(HullError::NotConvex { index: k });
    }
    if let Some(i) = points.iter().position(|&p| !contains(hull, p)) {
        return Err(HullError::PointOutside { index: i });
    }
    Ok(())
}
