//! 2D geometry primitives for the closest-pair search.
//!
//! Purpose
//! - A single typed `Point` (nalgebra `Vector2<f64>`), Euclidean `distance`,
//!   and the `ClosestPair` result threaded through the recursion.
//! - A reproducible point-cloud sampler in `rand` for oracles and benches.
//!
//! Code cross-refs: `sort`, `partition`, `strip`, `solver`

pub mod rand;
mod types;

pub use types::{distance, ClosestPair, Point, PointPair};

#[cfg(test)]
mod tests;
