//! Divide-and-conquer convex hull.
//!
//! Purpose
//! - Compute the convex hull of a finite 2D point set in O(n log n), returned as a
//!   counter-clockwise vertex list.
//!
//! Pipeline (leaf to root)
//! - `orient`: turn predicate, the single side-of-line test.
//! - `angular`: polar order around a per-call center (base case only).
//! - `brute`: O(n³) hull for at most `HullCfg::base_case_max` points.
//! - `tangent`: upper/lower bridges between a left and a right hull.
//! - `merge`: stitches two hulls along their bridges.
//! - this module: dedup, split at the midpoint, recurse on slices, merge.
//!
//! Assumptions and conventions
//! - Input to `convex_hull` is sorted lexicographically (x, then y). This is not
//!   checked; unsorted input yields an unspecified (but finite) result. Use
//!   `convex_hull_checked` to validate or `convex_hull_unsorted` to sort first.
//! - Duplicates collapse; strictly-interior collinear points are dropped, so a
//!   hull with ≥3 vertices has no collinear consecutive triple.
//! - Exact sign tests on f64; coordinates are assumed small enough that products
//!   do not lose precision (integer-valued inputs with |x|, |y| ≤ 2^25 are exact).

mod angular;
mod brute;
mod check;
mod merge;
mod orient;
mod tangent;
mod types;

pub use angular::angular_cmp;
pub use brute::brute_hull;
pub use check::{contains, is_convex_ccw, perimeter, signed_area, verify_hull};
pub use merge::merge_hulls;
pub use orient::orientation;
pub use tangent::{lower_tangent, upper_tangent};
pub use types::{
    is_lex_sorted, lex_cmp, sort_lex, HullCfg, HullError, Orientation, Point, Tangent,
};

/// Convex hull of lexicographically sorted points, counter-clockwise.
///
/// - empty input → empty hull
/// - one or two distinct points → those points
/// - all points collinear → the two extreme points
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    convex_hull_with(points, HullCfg::default())
}

/// As [`convex_hull`] with an explicit configuration.
pub fn convex_hull_with(points: &[Point], cfg: HullCfg) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.dedup();
    tracing::debug!(
        input = points.len(),
        distinct = pts.len(),
        base_case_max = cfg.base_case(),
        "convex_hull"
    );
    hull_sorted(&pts, cfg.base_case())
}

fn hull_sorted(points: &[Point], base_case: usize) -> Vec<Point> {
    if points.len() <= base_case {
        return brute_hull(points);
    }
    let (left, right) = points.split_at(points.len() / 2);
    let a = hull_sorted(left, base_case);
    let b = hull_sorted(right, base_case);
    merge_hulls(&a, &b)
}

/// Validates finiteness and the lexicographic precondition, then runs the core.
pub fn convex_hull_checked(points: &[Point], cfg: HullCfg) -> Result<Vec<Point>, HullError> {
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { index });
    }
    if let Some(k) = points
        .windows(2)
        .position(|w| lex_cmp(&w[0], &w[1]) == std::cmp::Ordering::Greater)
    {
        return Err(HullError::Unsorted { index: k + 1 });
    }
    Ok(convex_hull_with(points, cfg))
}

/// Sorts a copy of `points` lexicographically, then computes the hull.
pub fn convex_hull_unsorted(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    sort_lex(&mut pts);
    convex_hull(&pts)
}
