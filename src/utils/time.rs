//! Time and timestamp utilities
//!
//! All timestamps in the engine are milliseconds since the Unix epoch.
//! Clocks hand out strictly increasing values so that "most recent"
//! is never ambiguous between two actions in the same millisecond.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, TimeZone, Utc};

/// Source of activity timestamps
pub trait Clock: Send + Sync {
    /// Next timestamp in milliseconds; strictly greater than any earlier one
    fn now_millis(&self) -> i64;
}

/// Wall-clock time, bumped by one millisecond on collisions
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicI64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        let wall = current_timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = wall.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Deterministic clock for tests and replays: starts at a fixed instant
/// and advances by a fixed step on every read
#[derive(Debug)]
pub struct ManualClock {
    next: AtomicI64,
    step: i64,
}

impl ManualClock {
    pub fn starting_at(start: i64) -> Self {
        Self::with_step(start, 1)
    }

    pub fn with_step(start: i64, step: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
            step: step.max(1),
        }
    }

    /// Jump forward without producing a timestamp
    pub fn advance(&self, millis: i64) {
        self.next.fetch_add(millis.max(0), Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.next.fetch_add(self.step, Ordering::Relaxed)
    }
}

/// Current Unix timestamp in milliseconds
pub fn current_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a millisecond timestamp to a UTC datetime
pub fn to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

/// RFC 3339 rendering of a millisecond timestamp, or the raw number if
/// it is out of range
pub fn format_timestamp(millis: i64) -> String {
    match to_datetime(millis) {
        Some(dt) => dt.to_rfc3339(),
        None => millis.to_string(),
    }
}
