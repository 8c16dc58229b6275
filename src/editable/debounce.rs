//! Debounce timer for coalescing change events.
//!
//! Modeled as explicit state polled against caller-supplied instants rather
//! than a real timer thread: the session runs single-threaded inside a
//! host's event loop, and injected clocks keep the quiet-period behavior
//! testable.

use std::time::{Duration, Instant};

/// Quiet period after the last content change before a history snapshot is
/// recorded.
pub const CHANGE_DEBOUNCE: Duration = Duration::from_millis(768);

/// A cancel-and-rearm one-shot timer.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    period: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    /// Create a timer with the given quiet period
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// Arm the timer at `now`, cancelling any pending deadline
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// Cancel a pending deadline
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Check if a deadline is pending
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the quiet period has elapsed.
    ///
    /// Returns `true` at most once per arming; firing clears the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(CHANGE_DEBOUNCE)
    }
}
