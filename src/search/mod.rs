//! Synonym-aware interest search
//!
//! This module provides:
//! - A static interest vocabulary
//! - A bidirectional synonym index with one-hop expansion

mod index;
mod synonyms;

pub use index::{normalize, SynonymIndex};
pub use synonyms::INTEREST_SYNONYMS;
