//! Frame coalescing for rapid pointer moves.
//!
//! Pointers report moves far more often than a display refreshes. During a
//! drag only the latest position matters, so moves are staged here and
//! committed at most once per frame interval. A final flush on release
//! commits whatever is still pending regardless of timing.
//!
//! # How It Works
//!
//! [`FrameCoalescer::stage`] replaces the pending value and marks the cell
//! dirty. [`FrameCoalescer::poll`] is called from the frame callback and
//! yields the pending value once the interval since the last commit has
//! elapsed. [`FrameCoalescer::flush`] bypasses the interval.
//!
//! Time is passed in by the caller so tests and headless hosts can drive
//! the clock.

use std::time::{Duration, Instant};

use super::constants::timing::FRAME_INTERVAL_MS;

/// Latest-value-wins cell committed at most once per frame.
#[derive(Debug, Clone)]
pub struct FrameCoalescer<T> {
    /// Value waiting for the next commit.
    pending: Option<T>,
    /// When the last value was committed.
    last_commit: Option<Instant>,
    /// Minimum time between commits.
    interval: Duration,
    /// Number of staged values replaced before being committed.
    coalesced: u64,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self { Self::new(Duration::from_millis(FRAME_INTERVAL_MS)) }
}

impl<T> FrameCoalescer<T> {
    /// Creates a coalescer committing at most once per `interval`.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            pending: None,
            last_commit: None,
            interval,
            coalesced: 0,
        }
    }

    /// Creates a coalescer from an interval in milliseconds.
    #[must_use]
    pub const fn with_millis(interval_ms: u64) -> Self { Self::new(Duration::from_millis(interval_ms)) }

    /// Stages a value, replacing any uncommitted one.
    pub fn stage(&mut self, value: T) {
        if self.pending.replace(value).is_some() {
            self.coalesced += 1;
        }
    }

    /// Returns whether a value is waiting to be committed.
    #[must_use]
    pub const fn is_dirty(&self) -> bool { self.pending.is_some() }

    /// Number of values dropped in favour of a later one.
    #[must_use]
    pub const fn coalesced_count(&self) -> u64 { self.coalesced }

    /// Commits the pending value if a frame interval has passed since the
    /// last commit.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if !self.is_dirty() {
            return None;
        }

        let due = self
            .last_commit
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);
        if !due {
            tracing::trace!(coalesced = self.coalesced, "frame not due, holding pointer move");
            return None;
        }

        self.last_commit = Some(now);
        self.pending.take()
    }

    /// Commits the pending value immediately, ignoring the interval.
    pub fn flush(&mut self) -> Option<T> { self.pending.take() }

    /// Drops any pending value and resets timing.
    pub fn clear(&mut self) {
        self.pending = None;
        self.last_commit = None;
    }
}
