//! Property tests for the divide-and-conquer hull.
//!
//! Inputs are small integer lattices so every sign test is exact. The reference is
//! Andrew's monotone chain, which shares no code with the crate.

use dchull::hull::{
    contains, convex_hull, is_convex_ccw, lex_cmp, orientation, sort_lex, verify_hull,
    Orientation, Point,
};
use nalgebra::Vector2;
use proptest::prelude::*;

/// Andrew's monotone chain (CCW, collinear points dropped).
fn monotone_chain(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let cross = |o: Point, a: Point, b: Point| {
        let (oa, ob) = (a - o, b - o);
        oa.x * ob.y - oa.y * ob.x
    };
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

fn sorted(mut pts: Vec<Point>) -> Vec<Point> {
    sort_lex(&mut pts);
    pts
}

fn rotate_to_min(hull: &[Point]) -> Vec<Point> {
    let mut out = hull.to_vec();
    if let Some(k) = (0..out.len()).min_by(|&i, &j| lex_cmp(&out[i], &out[j])) {
        out.rotate_left(k);
    }
    out
}

fn lattice(max_len: usize, r: i32) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-r..=r, -r..=r), 0..max_len).prop_map(|v| {
        sorted(
            v.into_iter()
                .map(|(x, y)| Vector2::new(x as f64, y as f64))
                .collect(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn contains_every_input_point(pts in lattice(80, 12)) {
        let hull = convex_hull(&pts);
        for p in &pts {
            prop_assert!(contains(&hull, *p), "{p:?} outside {hull:?}");
        }
    }

    #[test]
    fn boundary_turns_counter_clockwise(pts in lattice(80, 12)) {
        let hull = convex_hull(&pts);
        prop_assert!(is_convex_ccw(&hull), "{hull:?}");
        let n = hull.len();
        if n >= 3 {
            for k in 0..n {
                prop_assert_eq!(
                    orientation(hull[k], hull[(k + 1) % n], hull[(k + 2) % n]),
                    Orientation::CounterClockwise
                );
            }
        }
    }

    #[test]
    fn agrees_with_monotone_chain(pts in lattice(120, 6)) {
        let hull = convex_hull(&pts);
        prop_assert_eq!(rotate_to_min(&hull), rotate_to_min(&monotone_chain(&pts)));
        prop_assert_eq!(verify_hull(&pts, &hull), Ok(()));
    }

    #[test]
    fn vertices_are_minimal(pts in lattice(60, 20)) {
        let hull = convex_hull(&pts);
        if hull.len() >= 3 {
            for k in 0..hull.len() {
                let mut reduced = hull.clone();
                let removed = reduced.remove(k);
                prop_assert!(!contains(&reduced, removed));
            }
        }
    }

    #[test]
    fn idempotent(pts in lattice(100, 30)) {
        let once = convex_hull(&pts);
        let twice = convex_hull(&sorted(once.clone()));
        prop_assert_eq!(rotate_to_min(&once), rotate_to_min(&twice));
    }

    #[test]
    fn duplicating_input_changes_nothing(pts in lattice(50, 8)) {
        let doubled: Vec<Point> = sorted(pts.iter().chain(pts.iter()).copied().collect());
        prop_assert_eq!(
            rotate_to_min(&convex_hull(&pts)),
            rotate_to_min(&convex_hull(&doubled))
        );
    }
}
