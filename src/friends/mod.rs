//! Friend graph
//!
//! A one-way, ordered relation from the viewer to profile names. Names
//! are kept in acceptance order and appear at most once. There is no
//! reciprocity check: the list is personal, not a mutual-consent graph.

use serde::{Deserialize, Serialize};

/// Ordered set of friend names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FriendList {
    names: Vec<String>,
}

impl FriendList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name at the end; returns false if it was already present
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Remove a name; returns false if it was not present
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in acceptance order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl<S: Into<String>> FromIterator<S> for FriendList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = FriendList::new();
        for name in iter {
            list.add(name);
        }
        list
    }
}

impl From<Vec<String>> for FriendList {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<FriendList> for Vec<String> {
    fn from(list: FriendList) -> Self {
        list.names
    }
}
