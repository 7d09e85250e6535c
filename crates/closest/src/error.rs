//! Error types for stepped runs and session input.
//!
//! Fewer than two points is never an error: it yields `ClosestPair::none()`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Why a stepped run ended without a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// The host called `cancel` on the run's signal.
    Cancelled,
    /// The worker thread running the computation panicked.
    WorkerPanicked,
}

impl Display for StepError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            StepError::Cancelled => write!(f, "stepped run cancelled"),
            StepError::WorkerPanicked => write!(f, "stepped run worker panicked"),
        }
    }
}

impl Error for StepError {}

/// Rejected session operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionError {
    /// Points cannot be added while a stepped run is in flight.
    InputDisabled,
    /// A stepped run is already in flight for this session.
    RunInProgress,
    /// Coordinates must be finite.
    NonFiniteCoordinate { x: f64, y: f64 },
    /// The worker thread for a stepped run could not be started.
    WorkerSpawn,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SessionError::InputDisabled => {
                write!(f, "interactive input is disabled during a stepped run")
            }
            SessionError::RunInProgress => write!(f, "a stepped run is already in progress"),
            SessionError::NonFiniteCoordinate { x, y } => {
                write!(f, "point ({x}, {y}) has a non-finite coordinate")
            }
            SessionError::WorkerSpawn => write!(f, "could not start the stepped run worker"),
        }
    }
}

impl Error for SessionError {}
