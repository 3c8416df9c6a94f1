//! Utility functions and helpers
//!
//! This module contains clocks, timestamp helpers and atomic file writes.

pub mod atomic;
pub mod time;

pub use atomic::{atomic_write, write_json_snapshot, AtomicError, AtomicResult};
pub use time::{current_timestamp_millis, format_timestamp, Clock, ManualClock, SystemClock};
