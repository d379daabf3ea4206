//! Divide-and-conquer convex hulls in 2D.
//!
//! Layout
//! - `hull`: the algorithm (orientation, angular order, brute-force base case,
//!   tangent finding, merge, recursive driver) plus hull checks.
//! - `cloud`: reproducible point clouds for tests, benches and the CLI.
//! - `api`: curated re-exports for callers.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` in a y-up frame.
//! - Hulls are listed counter-clockwise, without repeated or redundant collinear vertices.
//! - Inputs to the core must be sorted lexicographically (x, then y).

pub mod api;
pub mod cloud;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{convex_hull, convex_hull_with, HullCfg, HullError, Orientation, Point};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{
        contains, convex_hull, convex_hull_checked, convex_hull_unsorted, convex_hull_with,
        is_convex_ccw, lex_cmp, orientation, signed_area, sort_lex, verify_hull, HullCfg,
        HullError, Orientation, Point,
    };
    pub use crate::cloud::{draw_points, CloudCfg, CloudKind, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
