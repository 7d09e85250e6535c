//! Stepped execution: milestones, draw directives, and the advance signal.
//!
//! Purpose
//! - Make the top-level call of the solver observable: at each milestone a
//!   `Renderer` receives a `DrawDirective`, then the run blocks until the host
//!   calls `StepSignal::advance` (or `cancel`).
//! - Pausing is a pure control-flow suspension inside the solver; nothing is
//!   recomputed when the run resumes.
//!
//! Code cross-refs: `solver::{Pacer, solve_paced}`, `session::Session::start_stepped_run`

mod controller;
mod directive;
mod signal;

pub use controller::{closest_pair_stepped, StepController};
pub use directive::{ChannelRenderer, DrawDirective, Milestone, MilestoneKind, Renderer};
pub use signal::StepSignal;
