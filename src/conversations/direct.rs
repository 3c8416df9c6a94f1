//! Direct (one-to-one) chats

use serde::{Deserialize, Serialize};

use crate::types::{DirectThread, Message, MessageContent};

use super::ThreadList;

/// Direct threads keyed by counterpart name, ordered by recency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectChats {
    threads: ThreadList<DirectThread>,
}

impl DirectChats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a thread with `counterpart` unless one already exists.
    ///
    /// Returns true if a new thread was created.
    pub fn start(&mut self, counterpart: &str, now: i64) -> bool {
        let counterpart = counterpart.trim();
        if counterpart.is_empty() {
            return false;
        }
        self.threads.insert(DirectThread::new(counterpart, now))
    }

    /// Post a message from the acting user; unknown counterparts and blank
    /// content are no-ops
    pub fn send(&mut self, counterpart: &str, content: MessageContent, now: i64) -> bool {
        if content.is_blank() {
            return false;
        }
        self.threads
            .append(counterpart, Message::from_self(content, now), now)
    }

    pub fn remove(&mut self, counterpart: &str) -> Option<DirectThread> {
        self.threads.remove(counterpart)
    }

    pub fn get(&self, counterpart: &str) -> Option<&DirectThread> {
        self.threads.get(counterpart)
    }

    pub fn position(&self, counterpart: &str) -> Option<usize> {
        self.threads.position(counterpart)
    }

    pub fn threads(&self) -> &ThreadList<DirectThread> {
        &self.threads
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}

impl From<Vec<DirectThread>> for DirectChats {
    fn from(threads: Vec<DirectThread>) -> Self {
        Self {
            threads: ThreadList::from_threads(threads),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_idempotent() {
        let mut chats = DirectChats::new();
        assert!(chats.start("Bob Coder", 10));
        assert!(!chats.start("Bob Coder", 20));
        assert_eq!(chats.len(), 1);
        assert_eq!(chats.get("Bob Coder").unwrap().last_activity, 10);
    }

    #[test]
    fn test_new_thread_goes_first() {
        let mut chats = DirectChats::new();
        chats.start("Ann", 10);
        chats.start("Bob", 20);
        assert_eq!(chats.position("Bob"), Some(0));
    }

    #[test]
    fn test_send_moves_thread_first() {
        let mut chats = DirectChats::new();
        chats.start("Ann", 10);
        chats.start("Bob", 20);

        assert!(chats.send("Ann", MessageContent::text("hey"), 30));
        assert_eq!(chats.position("Ann"), Some(0));
        assert!(chats.get("Ann").unwrap().messages[0].mine);

        assert!(chats.send("Bob", MessageContent::text("yo"), 40));
        assert_eq!(chats.position("Bob"), Some(0));
    }

    #[test]
    fn test_send_to_unknown_is_noop() {
        let mut chats = DirectChats::new();
        assert!(!chats.send("Nobody", MessageContent::text("hi"), 1));
        assert!(chats.is_empty());
    }
}
