//! One-shot deferred actions
//!
//! The event loop has no background threads, so delayed work is queued here
//! with a due instant and collected by whoever owns the queue on each tick.
//! Entries cannot be cancelled; owners ignore stale ones when they fire.
//! Dropping the queue drops everything still pending.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Deferred<T> {
    due: Instant,
    action: T,
}

/// Queue of actions waiting for their due time
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    pending: Vec<Deferred<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Schedule `action` to fire `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: T) {
        self.pending.push(Deferred {
            due: now + delay,
            action,
        });
    }

    /// Remove and return every action due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|entry| entry.due <= now);
        self.pending = pending;
        due.sort_by_key(|entry| entry.due);
        due.into_iter().map(|entry| entry.action).collect()
    }

    /// Earliest pending due time
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|entry| entry.due).min()
    }
}
