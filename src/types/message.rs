//! Chat message types

use serde::{Deserialize, Serialize};

/// Sender name used for messages written by the acting user
pub const SELF_SENDER: &str = "You";

/// Message body: either text or an opaque drawing payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageContent {
    Text(String),
    /// Encoded raster blob from the drawing tool, never inspected
    Image(String),
}

impl MessageContent {
    pub fn text(text: impl Into<String>) -> Self {
        MessageContent::Text(text.into())
    }

    pub fn image(payload: impl Into<String>) -> Self {
        MessageContent::Image(payload.into())
    }

    /// Whitespace-only text and empty payloads carry nothing worth sending
    pub fn is_blank(&self) -> bool {
        match self {
            MessageContent::Text(text) => text.trim().is_empty(),
            MessageContent::Image(payload) => payload.is_empty(),
        }
    }
}

/// A single message in a thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "from")]
    pub sender: String,
    pub content: MessageContent,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    #[serde(rename = "me", default)]
    pub mine: bool,
}

impl Message {
    /// Message written by the acting user
    pub fn from_self(content: MessageContent, timestamp: i64) -> Self {
        Self {
            sender: SELF_SENDER.to_string(),
            content,
            timestamp,
            mine: true,
        }
    }
}
