//! Curated API surface (UNSTABLE).
//!
//! Important
//! - Convenience re-exports for the CLI and experiments. Breaking changes are
//!   allowed when they improve the design.

// Hull construction
pub use crate::hull::{
    convex_hull, convex_hull_checked, convex_hull_unsorted, convex_hull_with, HullCfg, Point,
};
// Hull checks and measures
pub use crate::hull::{
    contains, is_convex_ccw, is_lex_sorted, perimeter, signed_area, verify_hull, HullError,
};
// Building blocks (exposed for tests and visual debugging)
pub use crate::hull::{
    angular_cmp, brute_hull, lower_tangent, merge_hulls, orientation, upper_tangent, Orientation,
    Tangent,
};
// Point clouds
pub use crate::cloud::{draw_points, CloudCfg, CloudKind, ReplayToken as CloudReplay};

/// Pre: `points` is any finite point set.
/// Post: the hull vertex count, or 0 for empty input.
pub fn hull_size(points: &[Point]) -> usize {
    convex_hull_unsorted(points).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn hull_size_triangle_with_interior() {
        let pts = [
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 4.0],
        ];
        assert_eq!(hull_size(&pts), 3);
    }

    #[test]
    fn hull_size_randomized_seeded_never_exceeds_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let pts: Vec<Point> = (0..40)
            .map(|_| vector![rng.gen_range(-5..=5) as f64, rng.gen_range(-5..=5) as f64])
            .collect();
        let n = hull_size(&pts);
        assert!(n >= 1 && n <= pts.len());
    }
}
