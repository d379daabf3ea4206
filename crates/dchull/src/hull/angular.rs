//! Polar ordering around a reference origin, used by the brute-force base case.

use std::cmp::Ordering;

use super::types::Point;

/// Quadrant of a translated point: 1..=4 counter-clockwise from the positive x-axis.
///
/// Axis points resolve to the first matching quadrant, so the positive y-axis is
/// quadrant 1, the negative x-axis quadrant 2 and the negative y-axis quadrant 3.
#[inline]
fn quadrant(p: Point) -> u8 {
    if p.x >= 0.0 && p.y >= 0.0 {
        1
    } else if p.x <= 0.0 && p.y >= 0.0 {
        2
    } else if p.x <= 0.0 && p.y <= 0.0 {
        3
    } else {
        4
    }
}

/// Orders two points (already translated so the origin is the reference center) by
/// polar angle: quadrant first, then the sign of `p × q` within a quadrant.
///
/// Points on the same ray compare `Equal`.
pub fn angular_cmp(p: Point, q: Point) -> Ordering {
    match quadrant(p).cmp(&quadrant(q)) {
        Ordering::Equal => {
            let lhs = p.y * q.x;
            let rhs = q.y * p.x;
            lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal)
        }
        o => o,
    }
}
