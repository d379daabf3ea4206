//! Random point clouds in 2D (seeded + replay tokens).
//!
//! Purpose
//! - Small, deterministic samplers feeding the hull tests, benches and the CLI
//!   `gen` command. Every draw is reproducible from `(seed, index)`.
//!
//! Model
//! - `Disk`/`Square`: uniform interior clouds; hulls are small relative to n.
//! - `Circle`: points on a circle; every point is a hull vertex (merge worst case).
//! - `Lattice`: integer grid points in `[-radius, radius]²`; many duplicates and
//!   collinear runs, exact arithmetic.
//! - Output is sorted lexicographically, ready for `hull::convex_hull`.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hull::{sort_lex, Point};

/// Cloud shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudKind {
    Disk,
    Square,
    Circle,
    Lattice,
}

impl fmt::Display for CloudKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Disk => "disk",
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Lattice => "lattice",
        };
        f.write_str(s)
    }
}

impl FromStr for CloudKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "disk" => Ok(Self::Disk),
            "square" => Ok(Self::Square),
            "circle" => Ok(Self::Circle),
            "lattice" => Ok(Self::Lattice),
            other => Err(format!(
                "unknown cloud kind `{other}` (expected disk|square|circle|lattice)"
            )),
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub kind: CloudKind,
    /// Half-extent of the cloud. For `Lattice` it is truncated to an integer (min 1).
    pub radius: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            kind: CloudKind::Disk,
            radius: 100.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points, sorted lexicographically.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let r = if cfg.radius.is_finite() && cfg.radius > 0.0 {
        cfg.radius
    } else {
        1.0
    };
    let mut pts: Vec<Point> = (0..cfg.count)
        .map(|_| sample(&mut rng, cfg.kind, r))
        .collect();
    sort_lex(&mut pts);
    pts
}

fn sample<R: Rng>(rng: &mut R, kind: CloudKind, r: f64) -> Point {
    match kind {
        CloudKind::Disk => {
            // sqrt keeps the density uniform in area
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let rho = r * rng.gen::<f64>().sqrt();
            Vector2::new(th.cos() * rho, th.sin() * rho)
        }
        CloudKind::Square => Vector2::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r)),
        CloudKind::Circle => {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            Vector2::new(th.cos() * r, th.sin() * r)
        }
        CloudKind::Lattice => {
            let k = (r as i64).max(1);
            Vector2::new(rng.gen_range(-k..=k) as f64, rng.gen_range(-k..=k) as f64)
        }
    }
}
