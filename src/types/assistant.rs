//! Conversation types for the study assistant

use serde::{Deserialize, Serialize};

/// Author of an assistant conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// Plain history entry sent to the assistant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Recorded turn in the assistant log, keyed by its timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantTurn {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: i64,
}

impl AssistantTurn {
    pub fn to_chat_turn(&self) -> ChatTurn {
        ChatTurn::new(self.role, self.content.clone())
    }
}
