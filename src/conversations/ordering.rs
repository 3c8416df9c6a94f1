//! Recency-ordered thread collection

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{Message, Thread};

/// Threads kept in descending `last_activity` order after every mutation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ThreadList<T> {
    threads: Vec<T>,
}

impl<'de, T> Deserialize<'de> for ThreadList<T>
where
    T: Thread + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_threads)
    }
}

impl<T> Default for ThreadList<T> {
    fn default() -> Self {
        Self {
            threads: Vec::new(),
        }
    }
}

impl<T: Thread> ThreadList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary threads, establishing the ordering
    pub fn from_threads(threads: Vec<T>) -> Self {
        let mut list = Self { threads };
        list.sort_by_recency();
        list
    }

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.threads.iter().find(|t| t.key() == key)
    }

    pub fn get_mut(&mut self, key: &T::Key) -> Option<&mut T> {
        self.threads.iter_mut().find(|t| t.key() == key)
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.get(key).is_some()
    }

    /// Position in the ordered collection
    pub fn position(&self, key: &T::Key) -> Option<usize> {
        self.threads.iter().position(|t| t.key() == key)
    }

    /// Insert a thread unless one with the same key exists.
    ///
    /// Returns true if the thread was inserted.
    pub fn insert(&mut self, thread: T) -> bool {
        if self.contains(thread.key()) {
            return false;
        }
        self.threads.push(thread);
        self.sort_by_recency();
        true
    }

    /// Append a message, bump activity and re-sort.
    ///
    /// Unknown keys are a no-op; returns whether the thread existed.
    pub fn append(&mut self, key: &T::Key, message: Message, now: i64) -> bool {
        match self.get_mut(key) {
            Some(thread) => {
                thread.push(message, now);
                self.sort_by_recency();
                true
            }
            None => false,
        }
    }

    /// Apply an in-place edit that does not change activity
    pub fn modify<F>(&mut self, key: &T::Key, edit: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        match self.get_mut(key) {
            Some(thread) => {
                edit(thread);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        let index = self.position(key)?;
        Some(self.threads.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.threads.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.threads
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    /// Check the ordering invariant
    pub fn is_sorted(&self) -> bool {
        self.threads
            .windows(2)
            .all(|pair| pair[0].last_activity() >= pair[1].last_activity())
    }

    fn sort_by_recency(&mut self) {
        // stable: equal timestamps keep their relative order
        self.threads
            .sort_by(|a, b| b.last_activity().cmp(&a.last_activity()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DirectThread, MessageContent};

    fn list(threads: &[(&str, i64)]) -> ThreadList<DirectThread> {
        ThreadList::from_threads(
            threads
                .iter()
                .map(|(name, at)| DirectThread::new(*name, *at))
                .collect(),
        )
    }

    fn keys(list: &ThreadList<DirectThread>) -> Vec<&str> {
        list.iter().map(|t| t.counterpart.as_str()).collect()
    }

    fn hello(at: i64) -> Message {
        Message::from_self(MessageContent::text("hello"), at)
    }

    #[test]
    fn test_from_threads_sorts_descending() {
        let list = list(&[("a", 10), ("b", 30), ("c", 20)]);
        assert_eq!(keys(&list), vec!["b", "c", "a"]);
        assert!(list.is_sorted());
    }

    #[test]
    fn test_equal_timestamps_keep_order() {
        let list = list(&[("a", 10), ("b", 10), ("c", 10)]);
        assert_eq!(keys(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_append_moves_thread_to_front() {
        let mut list = list(&[("a", 30), ("b", 20), ("c", 10), ("d", 5)]);

        assert!(list.append("c", hello(40), 40));
        assert_eq!(keys(&list), vec!["c", "a", "b", "d"]);
        assert!(list.is_sorted());
        assert_eq!(list.get("c").unwrap().messages.len(), 1);
    }

    #[test]
    fn test_append_to_missing_is_noop() {
        let mut list = list(&[("a", 30), ("b", 20)]);
        let before = list.clone();
        assert!(!list.append("zed", hello(99), 99));
        assert_eq!(list, before);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut list = list(&[("a", 30)]);
        assert!(list.insert(DirectThread::new("b", 40)));
        assert!(!list.insert(DirectThread::new("b", 50)));
        assert_eq!(keys(&list), vec!["b", "a"]);
        assert_eq!(list.get("b").unwrap().last_activity, 40);
    }

    #[test]
    fn test_deserialize_restores_order() {
        let json = r#"[
            {"friend": "Old", "lastActivity": 1, "messages": []},
            {"friend": "New", "lastActivity": 5}
        ]"#;
        let list: ThreadList<DirectThread> = serde_json::from_str(json).unwrap();
        assert_eq!(keys(&list), vec!["New", "Old"]);
    }

    #[test]
    fn test_remove() {
        let mut list = list(&[("a", 30), ("b", 20)]);
        assert_eq!(list.remove("a").unwrap().counterpart, "a");
        assert!(list.remove("a").is_none());
        assert_eq!(keys(&list), vec!["b"]);
    }
}
