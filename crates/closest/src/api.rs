//! Curated API for hosts (renderers, CLIs, benches).
//!
//! Important
//! - Re-exports only; behavior lives in the modules named below.
//! - Hosts need three things: a `Session` (or the free functions), a
//!   `Renderer`, and the `StepSignal` of a running stepped run.

// Geometry
pub use crate::geom2::rand::{draw_points, Bounds2, CloudCfg, ReplayToken};
pub use crate::geom2::{distance, ClosestPair, Point, PointPair};
// Building blocks
pub use crate::partition::{partition, partition_both, split_by_rank, Halves};
pub use crate::sort::sort_by_xy;
pub use crate::strip::{build_strip, scan_strip, StripProbe};
// Solver and pacing
pub use crate::config::{MedianPolicy, SolverCfg, DEFAULT_POLL_INTERVAL, DEFAULT_WINDOW};
pub use crate::solver::{closest_pair, closest_pair_brute_force, solve_paced, Pacer, Silent};
pub use crate::step::{
    closest_pair_stepped, ChannelRenderer, DrawDirective, Milestone, MilestoneKind, Renderer,
    StepController, StepSignal,
};
// Host context
pub use crate::error::{SessionError, StepError};
pub use crate::session::{Session, SteppedRun};
