//! Brute-force hull for tiny point sets (the recursion base case).
//!
//! Model
//! - A pair (i, j) is a hull edge iff no point lies strictly on either side of both
//!   half-planes at once (all on one closed side) and every point exactly on the line
//!   lies inside the closed segment [i, j]. The second clause drops collinear
//!   points strictly between two hull vertices.
//! - The surviving endpoints are ordered counter-clockwise by polar angle around
//!   their centroid. The centroid is computed per call and passed into the
//!   comparator; no state is shared between calls.
//!
//! Runtime O(n³), fine for the handful of points the driver hands over.

use std::cmp::Ordering;

use super::angular::angular_cmp;
use super::orient::turn;
use super::types::{lex_cmp, Point};

/// True if every point lies on one closed side of line `p → q` and the points on the
/// line itself fall within the segment `[p, q]`.
fn is_hull_edge(points: &[Point], p: Point, q: Point) -> bool {
    let dir = q - p;
    let len2 = dir.dot(&dir);
    let mut left = false;
    let mut right = false;
    for &r in points {
        let side = turn(p, q, r);
        if side > 0.0 {
            left = true;
        } else if side < 0.0 {
            right = true;
        } else {
            let t = (r - p).dot(&dir);
            if t < 0.0 || t > len2 {
                return false;
            }
        }
        if left && right {
            return false;
        }
    }
    true
}

/// Convex hull of a small point set, counter-clockwise, duplicates collapsed.
///
/// - 0 points: empty.
/// - 1–2 distinct points: returned as given (deduplicated).
/// - otherwise: strict hull vertices sorted by angle around their centroid.
pub fn brute_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() <= 2 {
        // Keep the caller's order for the trivial cases.
        let mut out: Vec<Point> = Vec::with_capacity(pts.len());
        for p in points {
            if !out.contains(p) {
                out.push(*p);
            }
        }
        return out;
    }

    let mut verts: Vec<Point> = Vec::with_capacity(pts.len());
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            if is_hull_edge(&pts, pts[i], pts[j]) {
                for v in [pts[i], pts[j]] {
                    if !verts.contains(&v) {
                        verts.push(v);
                    }
                }
            }
        }
    }

    // Translate by n * centroid on scaled coordinates (n·p − Σp) to avoid the division.
    let n = verts.len() as f64;
    let sum = verts.iter().fold(Point::zeros(), |acc, v| acc + v);
    verts.sort_by(|p, q| match angular_cmp(p * n - sum, q * n - sum) {
        Ordering::Equal => lex_cmp(p, q),
        o => o,
    });
    verts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::orient::orientation;
    use crate::hull::Orientation;
    use nalgebra::vector;

    fn assert_ccw(hull: &[Point]) {
        let n = hull.len();
        for k in 0..n {
            let o = orientation(hull[k], hull[(k + 1) % n], hull[(k + 2) % n]);
            assert_eq!(o, Orientation::CounterClockwise, "at {k}: {hull:?}");
        }
    }

    #[test]
    fn trivial_sizes() {
        assert!(brute_hull(&[]).is_empty());
        let p = vector![5.0, 5.0];
        assert_eq!(brute_hull(&[p]), vec![p]);
        let q = vector![2.0, 2.0];
        assert_eq!(brute_hull(&[q, p]), vec![q, p]);
        assert_eq!(brute_hull(&[p, p, p]), vec![p]);
    }

    #[test]
    fn square_is_ccw() {
        let pts = [
            vector![0.0, 0.0],
            vector![0.0, 2.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
        ];
        let h = brute_hull(&pts);
        assert_eq!(h.len(), 4);
        assert_ccw(&h);
    }

    #[test]
    fn drops_collinear_midpoint() {
        let pts = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![2.0, 0.0],
        ];
        let h = brute_hull(&pts);
        assert_eq!(h.len(), 3);
        assert!(!h.contains(&vector![1.0, 0.0]));
        assert_ccw(&h);
    }

    #[test]
    fn collinear_set_becomes_segment() {
        let pts = [
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![2.0, 2.0],
            vector![3.0, 3.0],
        ];
        let mut h = brute_hull(&pts);
        h.sort_by(lex_cmp);
        assert_eq!(h, vec![vector![0.0, 0.0], vector![3.0, 3.0]]);
    }

    #[test]
    fn interior_point_is_excluded() {
        let pts = [
            vector![-2.0, -2.0],
            vector![-1.0, -1.0],
            vector![1.0, -1.0],
            vector![1.0, 1.0],
            vector![-7.0, 4.0],
        ];
        let h = brute_hull(&pts);
        assert!(!h.contains(&vector![-1.0, -1.0]));
        assert_eq!(h.len(), 4);
        assert_ccw(&h);
    }
}
