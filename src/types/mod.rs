//! Data types for the matching and session engine
//!
//! This module contains the core data structures shared by every component.

mod assistant;
mod message;
mod profile;
mod score;
mod thread;

pub use assistant::{AssistantTurn, ChatRole, ChatTurn};
pub use message::{Message, MessageContent, SELF_SENDER};
pub use profile::{split_interests, Profile, Viewer};
pub use score::{Criterion, ScoreBreakdown};
pub use thread::{DirectThread, GroupId, GroupThread, Thread};

/// Result type for binary-level operations
pub type AppResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
