//! Basic hull types: points, turn directions, tangents, config and errors.
//!
//! - `Point`: `Vector2<f64>`; ordered lexicographically via `lex_cmp`.
//! - `Orientation`: result of the turn predicate.
//! - `Tangent`: a bridge edge between a left and a right hull, as vertex indices.
//! - `HullCfg`: base-case threshold for the recursive driver.

use nalgebra::Vector2;
use std::cmp::Ordering;
use std::fmt;

/// A point in the plane (y-up frame).
pub type Point = Vector2<f64>;

/// Turn direction of an ordered triple of points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Right turn, cross product < 0.
    Clockwise,
    /// Left turn, cross product > 0.
    CounterClockwise,
    /// No turn, cross product = 0.
    Collinear,
}

/// Bridge edge between a left hull `A` and a right hull `B`: `A[a]`–`B[b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangent {
    pub a: usize,
    pub b: usize,
}

/// Hull construction configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullCfg {
    /// Inputs with at most this many distinct points go to the brute-force base case.
    /// Clamped to at least 3 when used.
    pub base_case_max: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self { base_case_max: 5 }
    }
}

impl HullCfg {
    #[inline]
    pub(crate) fn base_case(&self) -> usize {
        self.base_case_max.max(3)
    }
}

/// Lexicographic order: x first, ties broken by y (IEEE total order).
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Sort points in place by `lex_cmp`.
pub fn sort_lex(points: &mut [Point]) {
    points.sort_by(lex_cmp);
}

/// True if `points` is non-decreasing under `lex_cmp`.
pub fn is_lex_sorted(points: &[Point]) -> bool {
    points
        .windows(2)
        .all(|w| lex_cmp(&w[0], &w[1]) != Ordering::Greater)
}

/// Errors reported by the checked entry point and by `verify_hull`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Input point `index` has a NaN or infinite coordinate.
    NonFinite { index: usize },
    /// Input point `index` sorts before its predecessor.
    Unsorted { index: usize },
    /// Hull triple starting at vertex `index` does not turn counter-clockwise.
    NotConvex { index: usize },
    /// Input point `index` lies strictly outside the hull.
    PointOutside { index: usize },
    /// Hull vertex `index` is not one of the input points.
    ForeignVertex { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { index } => write!(f, "point {index} has a non-finite coordinate"),
            Self::Unsorted { index } => {
                write!(f, "input not sorted by (x, y): point {index} precedes its predecessor")
            }
            Self::NotConvex { index } => {
                write!(f, "hull is not strictly convex counter-clockwise at vertex {index}")
            }
            Self::PointOutside { index } => write!(f, "point {index} lies outside the hull"),
            Self::ForeignVertex { index } => {
                write!(f, "hull vertex {index} is not an input point")
            }
        }
    }
}

impl std::error::Error for HullError {}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn lex_order_breaks_ties_by_y() {
        let mut pts = vec![
            vector![1.0, 1.0],
            vector![-1.0, 5.0],
            vector![1.0, -1.0],
            vector![-1.0, -1.0],
        ];
        assert!(!is_lex_sorted(&pts));
        sort_lex(&mut pts);
        assert_eq!(
            pts,
            vec![
                vector![-1.0, -1.0],
                vector![-1.0, 5.0],
                vector![1.0, -1.0],
                vector![1.0, 1.0],
            ]
        );
        assert!(is_lex_sorted(&pts));
    }

    #[test]
    fn base_case_is_clamped() {
        assert_eq!(HullCfg::default().base_case(), 5);
        assert_eq!(HullCfg { base_case_max: 0 }.base_case(), 3);
        assert_eq!(HullCfg { base_case_max: 9 }.base_case(), 9);
    }

    #[test]
    fn error_messages_name_the_index() {
        let e = HullError::Unsorted { index: 7 };
        assert!(e.to_string().contains('7'));
    }
}
