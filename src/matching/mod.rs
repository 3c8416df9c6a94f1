//! Matching engine
//!
//! - `scorer`: pure compatibility scoring with synonym-aware interests
//! - `deck`: filtered, ranked, cursor-tracked swipe deck

mod deck;
mod scorer;

pub use deck::{Decision, Deck, DeckEntry, DeckState, SwipeOutcome};
pub use scorer::{
    interests_overlap, mutual_contains, score, study_matches, timeframe_matches,
    CompatibilityScorer, Scorer, FLEXIBLE,
};
