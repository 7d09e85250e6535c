//! Interactive session: the point set, its cached closest pair, and runs.
//!
//! A `Session` owns everything the host shares with the algorithm. Adding a
//! point recomputes the closest pair silently from scratch. A stepped run
//! works on a snapshot of the points in a worker thread and disables input
//! until it finishes; the host drives it through the returned `SteppedRun`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::config::SolverCfg;
use crate::error::{SessionError, StepError};
use crate::geom2::{ClosestPair, Point};
use crate::solver::closest_pair;
use crate::step::{closest_pair_stepped, DrawDirective, Renderer, StepSignal};

#[derive(Debug)]
pub struct Session {
    points: Vec<Point>,
    closest: ClosestPair,
    cfg: SolverCfg,
    interactive: Arc<AtomicBool>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SolverCfg::default())
    }
}

impl Session {
    pub fn new(cfg: SolverCfg) -> Self {
        Self {
            points: Vec::new(),
            closest: ClosestPair::none(),
            cfg,
            interactive: Arc::new(AtomicBool::new(true)),
        }
    }

    #[inline]
    pub fn cfg(&self) -> &SolverCfg {
        &self.cfg
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Closest pair as of the last insertion.
    #[inline]
    pub fn closest(&self) -> &ClosestPair {
        &self.closest
    }

    /// False while a stepped run is in flight.
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.interactive.load(Ordering::Acquire)
    }

    /// Append a point and recompute the closest pair.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<&ClosestPair, SessionError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(SessionError::NonFiniteCoordinate { x, y });
        }
        if !self.is_interactive() {
            tracing::warn!(x, y, "point rejected: stepped run in progress");
            return Err(SessionError::InputDisabled);
        }
        self.points.push(Point::new(x, y));
        self.closest = self.run_silently();
        tracing::debug!(n = self.points.len(), dist = self.closest.dist, "recomputed");
        Ok(&self.closest)
    }

    /// Full silent recomputation over the current points.
    pub fn run_silently(&self) -> ClosestPair {
        closest_pair(&self.points, self.cfg)
    }

    /// What to draw while no run is in flight.
    pub fn idle_view(&self) -> DrawDirective {
        DrawDirective::ShowDefault {
            points: self.points.clone(),
            closest: self.closest.pair,
        }
    }

    /// Start a stepped run over a snapshot of the current points.
    ///
    /// Input stays disabled until the worker finishes (normally, cancelled,
    /// or by panic).
    pub fn start_stepped_run<R>(&self, renderer: R) -> Result<SteppedRun, SessionError>
    where
        R: Renderer + Send + 'static,
    {
        if self
            .interactive
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SessionError::RunInProgress);
        }
        let guard = InputGuard(Arc::clone(&self.interactive));
        let points = self.points.clone();
        let cfg = self.cfg;
        let signal = StepSignal::new();
        let worker_signal = signal.clone();
        tracing::info!(n = points.len(), "stepped run started");
        let handle = thread::Builder::new()
            .name("closest-stepped".into())
            .spawn(move || {
                let _guard = guard;
                closest_pair_stepped(&points, cfg, renderer, &worker_signal)
            })
            .map_err(|e| {
                tracing::error!(error = %e, "could not spawn stepped run");
                SessionError::WorkerSpawn
            })?;
        Ok(SteppedRun {
            signal,
            handle: Some(handle),
        })
    }
}

/// Re-enables input when dropped.
struct InputGuard(Arc<AtomicBool>);

impl Drop for InputGuard {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Release);
    }
}

/// Handle to a stepped run in flight. Dropping it without `join` cancels the run.
#[derive(Debug)]
pub struct SteppedRun {
    signal: StepSignal,
    handle: Option<JoinHandle<Result<ClosestPair, StepError>>>,
}

impl SteppedRun {
    pub fn signal(&self) -> &StepSignal {
        &self.signal
    }

    pub fn advance(&self) {
        self.signal.advance();
    }

    pub fn cancel(&self) {
        self.signal.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Wait for the worker and return its result.
    pub fn join(mut self) -> Result<ClosestPair, StepError> {
        match self.handle.take() {
            Some(h) => h.join().unwrap_or(Err(StepError::WorkerPanicked)),
            None => Err(StepError::WorkerPanicked),
        }
    }
}

impl Drop for SteppedRun {
    fn drop(&mut self) {
        if let Some(h) = self.handle.take() {
            self.signal.cancel();
            let _ = h.join();
        }
    }
}
