//! Thread types for group and direct conversations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Message;

/// Common shape of a conversation thread kept in a recency-ordered list
pub trait Thread {
    /// Identity used to look the thread up
    type Key: ?Sized + PartialEq;

    fn key(&self) -> &Self::Key;

    /// Milliseconds since the Unix epoch of the latest activity
    fn last_activity(&self) -> i64;

    fn messages(&self) -> &[Message];

    /// Append a message and bump the activity timestamp
    fn push(&mut self, message: Message, now: i64);
}

/// Group thread identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named multi-member conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupThread {
    pub id: GroupId,
    pub name: String,
    pub members: Vec<String>,
    #[serde(rename = "lastActivity", default)]
    pub last_activity: i64,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Thread for GroupThread {
    type Key = GroupId;

    fn key(&self) -> &GroupId {
        &self.id
    }

    fn last_activity(&self) -> i64 {
        self.last_activity
    }

    fn messages(&self) -> &[Message] {
        &self.messages
    }

    fn push(&mut self, message: Message, now: i64) {
        self.messages.push(message);
        self.last_activity = now;
    }
}

/// One-to-one conversation with a single counterpart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectThread {
    #[serde(rename = "friend")]
    pub counterpart: String,
    #[serde(rename = "lastActivity", default)]
    pub last_activity: i64,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl DirectThread {
    pub fn new(counterpart: impl Into<String>, now: i64) -> Self {
        Self {
            counterpart: counterpart.into(),
            last_activity: now,
            messages: Vec::new(),
        }
    }
}

impl Thread for DirectThread {
    type Key = str;

    fn key(&self) -> &str {
        &self.counterpart
    }

    fn last_activity(&self) -> i64 {
        self.last_activity
    }

    fn messages(&self) -> &[Message] {
        &self.messages
    }

    fn push(&mut self, message: Message, now: i64) {
        self.messages.push(message);
        self.last_activity = now;
    }
}
