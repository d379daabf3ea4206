//! Hull of a fixed six-point set, printed one vertex per line.
//!
//! Usage:
//!   cargo run -p dchull --example six_points
//!   cargo run -p dchull --example six_points -- circle 200

use dchull::cloud::{draw_points, CloudCfg, CloudKind, ReplayToken};
use dchull::hull::{convex_hull, signed_area, sort_lex, Point};
use nalgebra::vector;

fn main() {
    let mut args = std::env::args().skip(1);
    let points: Vec<Point> = match args.next() {
        None => {
            let mut pts = vec![
                vector![1.0, 1.0],
                vector![1.0, -1.0],
                vector![-1.0, -1.0],
                vector![6.0, 1.0],
                vector![-2.0, -2.0],
                vector![-7.0, 4.0],
            ];
            sort_lex(&mut pts);
            pts
        }
        Some(kind) => {
            let kind: CloudKind = match kind.parse() {
                Ok(k) => k,
                Err(e) => {
                    eprintln!("{e}");
                    return;
                }
            };
            let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);
            let cfg = CloudCfg {
                count,
                kind,
                radius: 100.0,
            };
            draw_points(cfg, ReplayToken { seed: 2025, index: 0 })
        }
    };

    let hull = convex_hull(&points);
    println!("Convex Hull:");
    for p in &hull {
        println!("{} {}", p.x, p.y);
    }
    println!("vertices={} area={:.3}", hull.len(), signed_area(&hull));
}
