//! Solver configuration.
//!
//! Policy
//! - Defaults reproduce the classical demo: look-ahead window 8, a 50 ms
//!   re-check interval while paused, and median-valued points dropped from
//!   both halves.
//! - Plain `Copy` struct so callers can tweak one field with struct update
//!   syntax (`SolverCfg { window: 7, ..Default::default() }`).

use std::time::Duration;

/// Neighbor look-ahead bound for the strip scan.
pub const DEFAULT_WINDOW: usize = 8;
/// Maximum time a paused run sleeps before re-checking its signal.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How points whose x equals the median are assigned during partitioning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MedianPolicy {
    /// Strictly-less left, strictly-greater right, equal dropped from both.
    /// Dropped points are still seen by the strip of the level that dropped them.
    #[default]
    DropAtMedian,
    /// Split the x-ordering at the median index; every point lands on exactly one side.
    SplitByRank,
}

/// Closest-pair solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverCfg {
    /// Strip positions compared after each focus point. Values below 7 can miss pairs.
    pub window: usize,
    /// Upper bound on how long a paused run waits before re-checking its signal.
    pub poll_interval: Duration,
    pub median: MedianPolicy,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            poll_interval: DEFAULT_POLL_INTERVAL,
            median: MedianPolicy::DropAtMedian,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classical_demo() {
        let cfg = SolverCfg::default();
        assert_eq!(cfg.window, 8);
        assert_eq!(cfg.poll_interval, Duration::from_millis(50));
        assert_eq!(cfg.median, MedianPolicy::DropAtMedian);
    }
}
