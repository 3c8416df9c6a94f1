//! Group chats

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{GroupId, GroupThread, Message, MessageContent, SELF_SENDER};

use super::ThreadList;

/// Group threads ordered by recency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<GroupThread>", into = "Vec<GroupThread>")]
pub struct GroupChats {
    threads: ThreadList<GroupThread>,
    next_id: u64,
}

impl GroupChats {
    pub fn new() -> Self {
        Self {
            threads: ThreadList::new(),
            next_id: 1,
        }
    }

    /// Create a group, or return the existing one with the same name.
    ///
    /// The name is trimmed and must be non-empty, and at least one member
    /// is required; otherwise nothing is created. The acting user is
    /// appended to the member list.
    pub fn create(&mut self, name: &str, members: &[String], now: i64) -> Option<GroupId> {
        let name = name.trim();
        if name.is_empty() || members.is_empty() {
            return None;
        }

        if let Some(existing) = self.find_by_name(name) {
            return Some(existing.id);
        }

        let id = GroupId(self.next_id.max(1));
        self.next_id = id.0 + 1;

        let mut all_members: Vec<String> = Vec::with_capacity(members.len() + 1);
        for member in members {
            if !all_members.contains(member) && member != SELF_SENDER {
                all_members.push(member.clone());
            }
        }
        all_members.push(SELF_SENDER.to_string());

        self.threads.insert(GroupThread {
            id,
            name: name.to_string(),
            members: all_members,
            last_activity: now,
            messages: Vec::new(),
        });
        debug!(group = %id, name, "created group");
        Some(id)
    }

    /// Post a message from the acting user; blank content is ignored
    pub fn send(&mut self, id: GroupId, content: MessageContent, now: i64) -> bool {
        if content.is_blank() {
            return false;
        }
        self.threads.append(&id, Message::from_self(content, now), now)
    }

    /// Rename a group. Blank names, unknown ids and names already taken by
    /// another group are refused, so `create` stays idempotent by name.
    pub fn rename(&mut self, id: GroupId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        if self.find_by_name(name).is_some_and(|g| g.id != id) {
            debug!(group = %id, name, "rename refused: name in use");
            return false;
        }
        self.threads.modify(&id, |group| group.name = name.to_string())
    }

    /// Leave (drop) a group
    pub fn remove(&mut self, id: GroupId) -> Option<GroupThread> {
        self.threads.remove(&id)
    }

    pub fn get(&self, id: GroupId) -> Option<&GroupThread> {
        self.threads.get(&id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&GroupThread> {
        self.threads.iter().find(|g| g.name == name)
    }

    pub fn threads(&self) -> &ThreadList<GroupThread> {
        &self.threads
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}

impl From<Vec<GroupThread>> for GroupChats {
    fn from(threads: Vec<GroupThread>) -> Self {
        let next_id = threads.iter().map(|g| g.id.0).max().unwrap_or(0) + 1;
        Self {
            threads: ThreadList::from_threads(threads),
            next_id,
        }
    }
}

impl From<GroupChats> for Vec<GroupThread> {
    fn from(chats: GroupChats) -> Self {
        chats.threads.as_slice().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_create_appends_self() {
        let mut chats = GroupChats::new();
        let id = chats
            .create("  Algo club ", &members(&["Bob Coder", "Bob Coder"]), 100)
            .unwrap();

        let group = chats.get(id).unwrap();
        assert_eq!(group.name, "Algo club");
        assert_eq!(group.members, members(&["Bob Coder", "You"]));
        assert_eq!(group.last_activity, 100);
    }

    #[test]
    fn test_create_requires_name_and_members() {
        let mut chats = GroupChats::new();
        assert!(chats.create("   ", &members(&["Bob"]), 1).is_none());
        assert!(chats.create("Empty", &[], 1).is_none());
        assert!(chats.is_empty());
    }

    #[test]
    fn test_create_same_name_returns_existing() {
        let mut chats = GroupChats::new();
        let first = chats.create("Study", &members(&["Ann"]), 1).unwrap();
        let second = chats.create("Study", &members(&["Bob"]), 2).unwrap();
        assert_eq!(first, second);
        assert_eq!(chats.len(), 1);
    }

    #[test]
    fn test_send_reorders_by_activity() {
        let mut chats = GroupChats::new();
        let a = chats.create("A", &members(&["Ann"]), 1).unwrap();
        let b = chats.create("B", &members(&["Bob"]), 2).unwrap();
        assert_eq!(chats.threads().as_slice()[0].id, b);

        assert!(chats.send(a, MessageContent::text("hi"), 3));
        assert_eq!(chats.threads().as_slice()[0].id, a);
        assert!(chats.threads().is_sorted());

        assert!(!chats.send(b, MessageContent::text("   "), 4));
        assert_eq!(chats.threads().as_slice()[0].id, a);
    }

    #[test]
    fn test_image_message() {
        let mut chats = GroupChats::new();
        let id = chats.create("Art", &members(&["Wendy"]), 1).unwrap();
        assert!(chats.send(id, MessageContent::image("data:image/png;base64,AAAA"), 2));
        let msg = &chats.get(id).unwrap().messages[0];
        assert_eq!(msg.content, MessageContent::image("data:image/png;base64,AAAA"));
        assert!(msg.mine);
    }

    #[test]
    fn test_rename_and_remove_unknown_are_noops() {
        let mut chats = GroupChats::new();
        let id = chats.create("Old", &members(&["Ann"]), 1).unwrap();

        assert!(chats.rename(id, "New"));
        assert_eq!(chats.get(id).unwrap().name, "New");
        assert!(!chats.rename(id, " "));
        assert!(!chats.rename(GroupId(42), "Ghost"));

        assert!(chats.remove(GroupId(42)).is_none());
        assert!(chats.remove(id).is_some());
        assert!(chats.is_empty());
    }

    #[test]
    fn test_rename_to_taken_name_refused() {
        let mut chats = GroupChats::new();
        let a = chats.create("Algebra", &members(&["Ann"]), 1).unwrap();
        let b = chats.create("Biology", &members(&["Bob"]), 2).unwrap();

        assert!(!chats.rename(b, " Algebra "));
        assert_eq!(chats.get(b).unwrap().name, "Biology");
        // renaming a group to its own name is fine
        assert!(chats.rename(a, "Algebra"));

        assert_eq!(chats.create("Algebra", &members(&["Cy"]), 3), Some(a));
        assert_eq!(chats.len(), 2);
    }

    #[test]
    fn test_ids_continue_after_reload() {
        let mut chats = GroupChats::new();
        chats.create("A", &members(&["Ann"]), 1).unwrap();
        chats.create("B", &members(&["Bob"]), 2).unwrap();

        let json = serde_json::to_string(&chats).unwrap();
        let mut reloaded: GroupChats = serde_json::from_str(&json).unwrap();
        let c = reloaded.create("C", &members(&["Cy"]), 3).unwrap();
        assert_eq!(c, GroupId(3));
    }
}
