//! Random point clouds in 2D (uniform box + optional lattice snap, replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for point sets used by the
//!   oracle tests, the benches, and the CLI `--random` input.
//!
//! Model
//! - Draw `count` points uniformly from `bounds`. With `grid = Some(step)`,
//!   coordinates are snapped to multiples of `step`, which produces repeated
//!   x values and exact duplicates (the degenerate inputs for median ties).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Point`, `solver::closest_pair_brute_force`

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Axis-aligned sampling box.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min: Point::new(0.0, 0.0),
            max: Point::new(1000.0, 1000.0),
        }
    }
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub bounds: Bounds2,
    /// Lattice spacing for snapping. `None` keeps continuous coordinates.
    pub grid: Option<f64>,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            bounds: Bounds2::default(),
            grid: None,
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
        // SplitMix64-style mixing, cheap and stable.
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

/// Draw a point cloud. Degenerate bounds (min > max on an axis) collapse to `min`.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.bounds.min;
    let span = Point::new(
        (cfg.bounds.max.x - lo.x).max(0.0),
        (cfg.bounds.max.y - lo.y).max(0.0),
    );
    let step = cfg.grid.filter(|s| s.is_finite() && *s > 0.0);
    (0..cfg.count)
        .map(|_| {
            let mut x = lo.x + rng.gen::<f64>() * span.x;
            let mut y = lo.y + rng.gen::<f64>() * span.y;
            if let Some(s) = step {
                x = (x / s).round() * s;
                y = (y / s).round() * s;
            }
            Point::new(x, y)
        })
        .collect()
}
