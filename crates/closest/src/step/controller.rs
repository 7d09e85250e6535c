//! Stepped pacing: render each milestone, then block until advanced.

use std::time::Duration;

use crate::config::SolverCfg;
use crate::error::StepError;
use crate::geom2::{ClosestPair, Point};
use crate::solver::{solve_paced, Pacer};

use super::directive::{Milestone, Renderer};
use super::signal::StepSignal;

/// Pauses the solver at every top-level milestone.
///
/// Each pause renders the milestone, then consumes exactly one advance from
/// `signal`. Cancellation surfaces as `StepError::Cancelled` and unwinds the
/// recursion through `?`; no partial result is returned.
pub struct StepController<R> {
    renderer: R,
    signal: StepSignal,
    poll_interval: Duration,
    pauses: usize,
}

impl<R: Renderer> StepController<R> {
    pub fn new(renderer: R, signal: StepSignal, poll_interval: Duration) -> Self {
        Self {
            renderer,
            signal,
            poll_interval,
            pauses: 0,
        }
    }

    /// Number of milestones that were rendered and advanced past.
    pub fn pauses(&self) -> usize {
        self.pauses
    }
}

impl<R: Renderer> Pacer for StepController<R> {
    type Error = StepError;

    fn is_stepped(&self) -> bool {
        true
    }

    fn pause(&mut self, milestone: Milestone) -> Result<(), StepError> {
        if self.signal.is_cancelled() {
            return Err(StepError::Cancelled);
        }
        tracing::debug!(kind = ?milestone.kind, pause = self.pauses, "milestone");
        self.renderer.render(&milestone);
        self.signal.wait(self.poll_interval)?;
        self.pauses += 1;
        Ok(())
    }
}

/// Stepped run on the calling thread. Returns the same pair as `closest_pair`.
pub fn closest_pair_stepped<R: Renderer>(
    points: &[Point],
    cfg: SolverCfg,
    renderer: R,
    signal: &StepSignal,
) -> Result<ClosestPair, StepError> {
    let mut ctl = StepController::new(renderer, signal.clone(), cfg.poll_interval);
    let best = solve_paced(points, cfg, &mut ctl);
    match &best {
        Ok(r) => tracing::debug!(pauses = ctl.pauses(), dist = r.dist, "stepped run finished"),
        Err(e) => tracing::debug!(pauses = ctl.pauses(), error = %e, "stepped run ended early"),
    }
    best
}
