//! Synonym index for interest expansion
//!
//! Built once from a static table. Holds a forward map (key → synonyms)
//! and a reverse map (synonym → keys listing it) so expansion is two
//! hash lookups instead of a scan of the whole table.

use std::collections::{HashMap, HashSet};

use super::synonyms::INTEREST_SYNONYMS;

/// Bidirectional, one-hop synonym lookup
#[derive(Debug, Default, Clone)]
pub struct SynonymIndex {
    /// key → synonyms listed under it
    forward: HashMap<String, Vec<String>>,

    /// synonym → keys whose list contains it
    reverse: HashMap<String, Vec<String>>,
}

impl SynonymIndex {
    /// Create an empty index; every term expands only to itself
    pub fn new() -> Self {
        Self::default()
    }

    /// Index built from the bundled interest vocabulary
    pub fn interests() -> Self {
        Self::from_table(INTEREST_SYNONYMS)
    }

    /// Build from a (key, synonyms) table
    pub fn from_table(table: &[(&str, &[&str])]) -> Self {
        let mut index = Self::new();
        for (key, synonyms) in table {
            index.insert(key, synonyms.iter().copied());
        }
        index
    }

    /// Add a key with its synonyms (merged if the key already exists)
    pub fn insert<'a>(&mut self, key: &str, synonyms: impl IntoIterator<Item = &'a str>) {
        let key = normalize(key);
        let entry = self.forward.entry(key.clone()).or_default();

        for syn in synonyms {
            let syn = normalize(syn);
            if syn.is_empty() || entry.contains(&syn) {
                continue;
            }
            entry.push(syn.clone());

            let keys = self.reverse.entry(syn).or_default();
            if !keys.contains(&key) {
                keys.push(key.clone());
            }
        }
    }

    /// Expand a term into itself, its direct synonyms and, for every key
    /// listing it, that key and all of that key's synonyms.
    ///
    /// One hop only: the expansion is not a transitive closure.
    pub fn expand(&self, term: &str) -> HashSet<String> {
        let term = normalize(term);
        let mut expanded = HashSet::new();

        if let Some(synonyms) = self.forward.get(&term) {
            expanded.extend(synonyms.iter().cloned());
        }

        if let Some(keys) = self.reverse.get(&term) {
            for key in keys {
                expanded.insert(key.clone());
                if let Some(synonyms) = self.forward.get(key) {
                    expanded.extend(synonyms.iter().cloned());
                }
            }
        }

        expanded.insert(term);
        expanded
    }

    /// Union of expansions of all terms
    pub fn expand_all<S: AsRef<str>>(&self, terms: &[S]) -> HashSet<String> {
        let mut expanded = HashSet::new();
        for term in terms {
            expanded.extend(self.expand(term.as_ref()));
        }
        expanded
    }

    /// Number of keys in the index
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Lower-case and trim an interest term
pub fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}
