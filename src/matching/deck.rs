//! Swipe deck
//!
//! A deck is built once from a viewer and a candidate pool, then stepped
//! through linearly. It is never patched: any change to its inputs means
//! building a new one.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::friends::FriendList;
use crate::types::{Profile, ScoreBreakdown, Viewer};

use super::Scorer;

/// Swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accept,
    Reject,
}

/// Deck state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    /// Cursor points at the candidate currently on display
    Active(usize),
    /// Every candidate has been decided
    Exhausted,
}

/// A ranked candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckEntry {
    pub profile: Profile,
    pub breakdown: ScoreBreakdown,
}

impl DeckEntry {
    pub fn score(&self) -> f64 {
        self.breakdown.score
    }
}

/// What a decision did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeOutcome {
    pub name: String,
    pub decision: Decision,
    /// True if the name was newly added to the friend list
    pub befriended: bool,
    pub state: DeckState,
}

/// Ranked, filtered, cursor-tracked candidates for one swipe session
#[derive(Debug, Clone, Default)]
pub struct Deck {
    entries: Vec<DeckEntry>,
    cursor: usize,
}

impl Deck {
    /// Build a deck: drop friends, score, keep `score >= threshold`, rank
    /// by score descending. Ties keep pool order.
    pub fn build<S>(scorer: &S, viewer: &Viewer, pool: &[Profile], threshold: f64) -> Self
    where
        S: Scorer + ?Sized,
    {
        Self::build_excluding(scorer, viewer, pool, threshold, &HashSet::new())
    }

    /// Like `build`, additionally dropping any name in `excluded`.
    ///
    /// A candidate the scorer rejects counts as `ScoreBreakdown::zero()`:
    /// construction goes on, and it is only admitted when `threshold <= 0`.
    pub fn build_excluding<S>(
        scorer: &S,
        viewer: &Viewer,
        pool: &[Profile],
        threshold: f64,
        excluded: &HashSet<String>,
    ) -> Self
    where
        S: Scorer + ?Sized,
    {
        let mut entries = Vec::new();

        for candidate in pool {
            if viewer.friends.contains(&candidate.name) || excluded.contains(&candidate.name) {
                continue;
            }

            let breakdown = match scorer.score(viewer, candidate) {
                Ok(breakdown) => breakdown,
                Err(e) => {
                    warn!(candidate = %candidate.name, error = %e, "unscorable candidate, scoring 0");
                    ScoreBreakdown::zero()
                }
            };

            if breakdown.score >= threshold {
                entries.push(DeckEntry {
                    profile: candidate.clone(),
                    breakdown,
                });
            }
        }

        // sort_by is stable, ties keep pool order
        entries.sort_by(|a, b| b.score().total_cmp(&a.score()));

        debug!(
            viewer = %viewer.name(),
            pool = pool.len(),
            admitted = entries.len(),
            threshold,
            "built deck"
        );

        Self { entries, cursor: 0 }
    }

    pub fn state(&self) -> DeckState {
        if self.cursor < self.entries.len() {
            DeckState::Active(self.cursor)
        } else {
            DeckState::Exhausted
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state() == DeckState::Exhausted
    }

    /// Candidate currently on display
    pub fn current(&self) -> Option<&DeckEntry> {
        self.entries.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidates not yet decided
    pub fn remaining(&self) -> usize {
        self.entries.len().saturating_sub(self.cursor)
    }

    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    /// Decide on the current candidate and advance the cursor by one.
    ///
    /// Accepting adds the candidate to `friends` (no-op if already there).
    /// Returns `None` without side effects once the deck is exhausted.
    pub fn decide(&mut self, decision: Decision, friends: &mut FriendList) -> Option<SwipeOutcome> {
        let current = self.current()?;
        let name = current.profile.name.clone();
        let percent = current.breakdown.percent();

        let befriended = match decision {
            Decision::Accept => friends.add(name.clone()),
            Decision::Reject => false,
        };
        self.cursor += 1;

        let state = self.state();
        debug!(candidate = %name, percent, ?decision, ?state, "swipe");

        Some(SwipeOutcome {
            name,
            decision,
            befriended,
            state,
        })
    }
}
