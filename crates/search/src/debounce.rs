//! Keystroke debouncing.
//!
//! [`Debouncer`] is a pure state machine: callers hand it the current
//! [`Instant`] and arm their own timer on the deadline it returns. Keeping the
//! clock outside makes the coalescing rules testable without sleeping.

use std::time::Duration;

use tokio::time::Instant;

/// Outcome of feeding a value to the [`Debouncer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Debounced {
    /// The value settled immediately (zero delay).
    Settled(String),
    /// The value is pending until the deadline; arm a timer for it.
    Scheduled(Instant),
}

#[derive(Debug)]
struct Pending {
    value: String,
    deadline: Instant,
}

/// Collapses a burst of values into the last one once the input has been quiet
/// for `delay`.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new value observed at `now`.
    ///
    /// Restarts the quiet window and replaces any pending value. With a zero
    /// delay nothing is held back and the value settles synchronously.
    pub fn push(&mut self, value: String, now: Instant) -> Debounced {
        if self.delay.is_zero() {
            self.pending = None;
            return Debounced::Settled(value);
        }

        let deadline = now + self.delay;
        self.pending = Some(Pending { value, deadline });
        Debounced::Scheduled(deadline)
    }

    /// Take the pending value if its window has elapsed at `now`.
    ///
    /// Returns `None` for early wake-ups; the pending value stays armed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => {
                self.pending.take().map(|pending| pending.value)
            }
            _ => None,
        }
    }

    /// Deadline of the pending value, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Discard the pending value without emitting it.
    ///
    /// Returns `true` if a value was discarded.
    pub fn reset(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
