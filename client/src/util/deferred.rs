//! One-shot scheduled callbacks that can be cancelled.
//!
//! DESIGN
//! ======
//! Wraps `gloo_timers::callback::Timeout` so pages can hold the pending task
//! and drop or cancel it from `on_cleanup`. Outside the browser the callback is
//! discarded without running; server rendering never fires timers.

#[cfg(test)]
#[path = "deferred_test.rs"]
mod deferred_test;

use std::time::Duration;

/// A callback scheduled to run once after a delay.
///
/// Dropping the handle cancels the callback if it has not fired yet.
#[must_use = "dropping a Deferred cancels it"]
pub struct Deferred {
    #[cfg(feature = "hydrate")]
    timeout: gloo_timers::callback::Timeout,
}

impl Deferred {
    /// Schedule `callback` to run once after `delay`.
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            Self { timeout: gloo_timers::callback::Timeout::new(delay_millis(delay), callback) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, callback);
            Self {}
        }
    }

    /// Cancel the callback if it has not fired yet.
    pub fn cancel(self) {
        #[cfg(feature = "hydrate")]
        {
            drop(self.timeout.cancel());
        }
    }
}

impl std::fmt::Debug for Deferred {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}

/// Clamp a duration to the `u32` millisecond range browser timers accept.
#[must_use]
pub fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
