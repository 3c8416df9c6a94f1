//! Study assistant boundary
//!
//! The assistant itself is an external collaborator. This module owns the
//! conversation log around it: the user's turn is recorded optimistically,
//! and removed again (by its timestamp) if the collaborator fails, so the
//! log never holds an unanswered prompt.

mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AssistantError;
use crate::types::{AssistantTurn, ChatRole, ChatTurn};
use crate::utils::Clock;

pub use client::{ChatCompletionsAssistant, FALLBACK_REPLY, SYSTEM_PROMPT};

/// Something that answers a conversation
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Produce the next assistant reply for `history` (oldest first)
    async fn ask(&self, history: &[ChatTurn]) -> Result<String, AssistantError>;
}

/// Ordered user/assistant turns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssistantLog {
    turns: Vec<AssistantTurn>,
}

impl AssistantLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send a prompt and record the reply.
    ///
    /// On failure the prompt is removed from the log again and the error
    /// is returned to the caller.
    pub async fn send<A>(
        &mut self,
        assistant: &A,
        prompt: &str,
        clock: &dyn Clock,
    ) -> Result<AssistantTurn, AssistantError>
    where
        A: Assistant + ?Sized,
    {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        let user_turn = AssistantTurn {
            role: ChatRole::User,
            content: prompt.to_string(),
            timestamp: clock.now_millis(),
        };
        let user_key = user_turn.timestamp;
        self.turns.push(user_turn);

        let history = self.history();
        match assistant.ask(&history).await {
            Ok(reply) => {
                let reply_turn = AssistantTurn {
                    role: ChatRole::Assistant,
                    content: reply,
                    timestamp: clock.now_millis(),
                };
                self.turns.push(reply_turn.clone());
                Ok(reply_turn)
            }
            Err(e) => {
                warn!(error = %e, "assistant failed, rolling back prompt");
                self.rollback(user_key);
                Err(e)
            }
        }
    }

    /// Remove the user turn recorded at `timestamp`
    fn rollback(&mut self, timestamp: i64) {
        self.turns
            .retain(|t| !(t.role == ChatRole::User && t.timestamp == timestamp));
    }

    /// Role/content pairs to hand to the collaborator
    pub fn history(&self) -> Vec<ChatTurn> {
        self.turns.iter().map(AssistantTurn::to_chat_turn).collect()
    }

    pub fn turns(&self) -> &[AssistantTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
