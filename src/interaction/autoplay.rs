//! Repeating autoplay timer
//!
//! Thin wrapper over `gloo_timers::callback::Interval`. Starting always
//! replaces any running timer with a fresh full-interval one, which is
//! exactly the restart-from-zero semantics hover pause/resume needs: there
//! is no resume-from-remaining-time.

use gloo_timers::callback::Interval;

/// Repeating timer driving autoplay transitions
pub struct AutoplayTimer {
    interval_ms: u32,
    handle: Option<Interval>,
}

impl AutoplayTimer {
    /// Creates an idle timer with the given tick interval
    #[must_use]
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            handle: None,
        }
    }

    /// Starts a fresh full-interval timer, cancelling any running one first
    pub fn start<F>(&mut self, tick: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        self.handle = Some(Interval::new(self.interval_ms, tick));
    }

    /// Cancels the timer. No-op when idle.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }

    /// Whether a timer is currently scheduled
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Configured tick interval in milliseconds
    #[must_use]
    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}
