//! The shared "advance" signal of a stepped run.
//!
//! One boolean flag consumed at most once per pause: several `advance` calls
//! made before the run reaches its next pause coalesce into one. A separate
//! cancel flag is sticky and wins over a pending advance.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::error::StepError;

#[derive(Debug, Default)]
struct SignalState {
    advance: bool,
    cancelled: bool,
}

#[derive(Debug, Default)]
struct Shared {
    state: Mutex<SignalState>,
    wake: Condvar,
}

/// Cloneable handle; all clones share one flag pair.
#[derive(Clone, Debug, Default)]
pub struct StepSignal {
    inner: Arc<Shared>,
}

impl StepSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let the run continue past its current (or next) pause.
    pub fn advance(&self) {
        self.lock().advance = true;
        self.inner.wake.notify_all();
    }

    /// End the run at its current (or next) pause with `StepError::Cancelled`.
    pub fn cancel(&self) {
        self.lock().cancelled = true;
        self.inner.wake.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    /// An advance has been signalled but not consumed yet.
    pub fn is_pending(&self) -> bool {
        self.lock().advance
    }

    /// Block until an advance is available, then consume it.
    ///
    /// Sleeps on a condvar and re-checks at least every `poll_interval`. There
    /// is no timeout: without `advance` or `cancel` this waits forever.
    pub fn wait(&self, poll_interval: Duration) -> Result<(), StepError> {
        let poll = poll_interval.max(Duration::from_millis(1));
        let mut state = self.lock();
        loop {
            if state.cancelled {
                return Err(StepError::Cancelled);
            }
            if state.advance {
                state.advance = false;
                return Ok(());
            }
            state = match self.inner.wake.wait_timeout(state, poll) {
                Ok((guard, _)) => guard,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }
    }

    fn lock(&self) -> MutexGuard<'_, SignalState> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const POLL: Duration = Duration::from_millis(5);

    #[test]
    fn advance_is_consumed_once() {
        let s = StepSignal::new();
        s.advance();
        s.advance();
        assert!(s.is_pending());
        assert_eq!(s.wait(POLL), Ok(()));
        assert!(!s.is_pending());
    }

    #[test]
    fn cancel_wins_over_pending_advance() {
        let s = StepSignal::new();
        s.advance();
        s.cancel();
        assert_eq!(s.wait(POLL), Err(StepError::Cancelled));
        // Sticky.
        assert_eq!(s.wait(POLL), Err(StepError::Cancelled));
        assert!(s.is_cancelled());
    }

    #[test]
    fn wait_unblocks_on_advance_from_other_thread() {
        let s = StepSignal::new();
        let remote = s.clone();
        let waiter = thread::spawn(move || remote.wait(POLL));
        thread::sleep(Duration::from_millis(20));
        s.advance();
        assert_eq!(waiter.join().unwrap(), Ok(()));
    }

    #[test]
    fn wait_unblocks_on_cancel_from_other_thread() {
        let s = StepSignal::new();
        let remote = s.clone();
        let waiter = thread::spawn(move || remote.wait(Duration::from_secs(60)));
        thread::sleep(Duration::from_millis(20));
        s.cancel();
        assert_eq!(waiter.join().unwrap(), Err(StepError::Cancelled));
    }
}
