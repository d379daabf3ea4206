//! Point input and hull output.
//!
//! Inputs
//! - `.csv` with `x` and `y` columns (polars, schema inferred from the first rows).
//! - JSON array of `[x, y]` pairs or `{"x": .., "y": ..}` objects; `-` reads stdin.
//!
//! Outputs
//! - Text: `Convex Hull:` followed by one `x y` line per vertex.
//! - JSON: `HullReport`, or a plain pair array for generated clouds.

use anyhow::{bail, Context, Result};
use dchull::hull::Point;
use nalgebra::Vector2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum PointRecord {
    Pair([f64; 2]),
    Xy { x: f64, y: f64 },
}

impl From<PointRecord> for Point {
    fn from(r: PointRecord) -> Self {
        match r {
            PointRecord::Pair([x, y]) => Vector2::new(x, y),
            PointRecord::Xy { x, y } => Vector2::new(x, y),
        }
    }
}

/// Summary written by `hull --out`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HullReport {
    pub hull: Vec<[f64; 2]>,
    pub input_points: usize,
    pub area: f64,
    pub perimeter: f64,
    pub base_case_max: usize,
}

pub fn read_points(input: &str) -> Result<Vec<Point>> {
    if input == "-" {
        return read_json_points(std::io::stdin().lock()).context("reading points from stdin");
    }
    if input.ends_with(".csv") {
        return read_csv(input).with_context(|| format!("reading CSV {input}"));
    }
    let bytes = std::fs::read(input).with_context(|| format!("reading {input}"))?;
    parse_json_points(&bytes).with_context(|| format!("parsing {input}"))
}

/// Drain `reader` and parse its JSON points.
pub fn read_json_points<R: Read>(mut reader: R) -> Result<Vec<Point>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse_json_points(&buf)
}

pub fn parse_json_points(bytes: &[u8]) -> Result<Vec<Point>> {
    let records: Vec<PointRecord> = serde_json::from_slice(bytes)?;
    Ok(records.into_iter().map(Point::from).collect())
}

fn read_csv(path: &str) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    tracing::debug!(rows = df.height(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vector2::new(x, y)),
            _ => bail!("row {row}: missing x or y"),
        })
        .collect()
}

pub fn pairs(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

pub fn format_text(hull: &[Point]) -> String {
    let mut s = String::from("Convex Hull:\n");
    for p in hull {
        s.push_str(&format!("{} {}\n", p.x, p.y));
    }
    s
}

/// Write pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(out: impl AsRef<Path>, value: &T) -> Result<()> {
    let out_path = out.as_ref();
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    Ok(())
}
