//! Point-set sources for the CLI: CSV (polars), JSON (serde), or a random cloud.

use anyhow::{bail, Context, Result};
use clap::Args;
use closest::api::{draw_points, CloudCfg, Point, ReplayToken};
use polars::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// CSV with `x` and `y` columns, or JSON array of `{"x": .., "y": ..}`
    #[arg(long, conflicts_with = "random")]
    pub input: Option<PathBuf>,
    /// Draw this many random points instead of reading a file
    #[arg(long)]
    pub random: Option<usize>,
    /// Seed for `--random`
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Snap random points to a lattice of this spacing (forces repeated x values)
    #[arg(long)]
    pub grid: Option<f64>,
}

#[derive(Deserialize)]
struct PointRecord {
    x: f64,
    y: f64,
}

pub fn load(args: &InputArgs) -> Result<Vec<Point>> {
    let points = match (&args.input, args.random) {
        (Some(path), _) => read_file(path)?,
        (None, Some(count)) => draw_points(
            CloudCfg {
                count,
                grid: args.grid,
                ..Default::default()
            },
            ReplayToken {
                seed: args.seed,
                index: 0,
            },
        ),
        (None, None) => bail!("pass --input FILE or --random N"),
    };
    if let Some(p) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
        bail!("non-finite point ({}, {}) in input", p.x, p.y);
    }
    tracing::debug!(n = points.len(), "points loaded");
    Ok(points)
}

fn read_file(path: &Path) -> Result<Vec<Point>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        Some("json") => read_json(path),
        _ => bail!("unsupported input {} (expected .csv or .json)", path.display()),
    }
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {}", path.display()))?
        .collect()?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    Ok(xs.into_iter().zip(ys).map(|(x, y)| Point::new(x, y)).collect())
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("row {row}: empty `{name}`")))
        .collect()
}

fn read_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<PointRecord> =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(records.into_iter().map(|r| Point::new(r.x, r.y)).collect())
}
