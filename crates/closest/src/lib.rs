//! Closest pair of 2D points by divide and conquer, silent or stepped.
//!
//! Layers (leaves first)
//! - `geom2`: `Point`, `distance`, `ClosestPair`, random point clouds.
//! - `sort`, `partition`, `strip`: the O(n) building blocks of each level.
//! - `solver`: the recursion, generic over a `Pacer`.
//! - `step`: milestones, draw directives, and the advance signal.
//! - `session`: the host-facing context owning the point set.
//!
//! API Policy
//! - Prefer `api` (or `prelude`) re-exports over deep module paths in callers.

pub mod api;
pub mod config;
pub mod error;
pub mod geom2;
pub mod partition;
pub mod session;
pub mod solver;
pub mod sort;
pub mod step;
pub mod strip;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{distance, ClosestPair, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::config::{MedianPolicy, SolverCfg};
    pub use crate::error::{SessionError, StepError};
    pub use crate::geom2::rand::{draw_points, Bounds2, CloudCfg, ReplayToken};
    pub use crate::geom2::{distance, ClosestPair, Point, PointPair};
    pub use crate::session::{Session, SteppedRun};
    pub use crate::solver::{closest_pair, closest_pair_brute_force};
    pub use crate::step::{
        closest_pair_stepped, ChannelRenderer, DrawDirective, Milestone, MilestoneKind, Renderer,
        StepSignal,
    };
}
