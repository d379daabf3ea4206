use super::types::{Orientation, Point};

/// Raw turn value `(b − a) × (c − b)`: positive for a left turn.
#[inline]
pub(crate) fn turn(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let bc = c - b;
    ab.x * bc.y - ab.y * bc.x
}

/// Classifies the turn `a → b → c`.
///
/// This is the only side-of-line predicate in the crate; every caller reads the
/// sign the same way (positive = counter-clockwise).
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let t = turn(a, b, c);
    if t > 0.0 {
        Orientation::CounterClockwise
    } else if t < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}
