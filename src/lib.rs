//! Study Match
//!
//! Peer matching and messaging engine for students: compatibility scoring
//! with synonym-aware interests, a swipe deck, a one-way friend list and
//! recency-ordered group and direct conversations.
//!
//! # Modules
//!
//! - `types`: Core data structures (Profile, Viewer, ScoreBreakdown, threads)
//! - `search`: Interest synonym table and expansion index
//! - `matching`: Compatibility scorer and swipe deck
//! - `friends`: Ordered friend list
//! - `conversations`: Group and direct threads ordered by recency
//! - `assistant`: Study assistant client and conversation log
//! - `store`: Profile/thread stores, accounts and demo data
//! - `session`: Per-user session context tying it all together
//! - `utils`: Clocks and atomic snapshot writes
//!
//! # Example
//!
//! ```no_run
//! use study_match::{Decision, MatchConfig, MemoryStore, Session};
//!
//! let store = MemoryStore::seeded();
//! let mut session = Session::load(&store, MatchConfig::default()).unwrap();
//! for entry in session.deck().entries() {
//!     println!("{} {:.0}", entry.profile.name, entry.score());
//! }
//! session.swipe(Decision::Accept);
//! ```

pub mod assistant;
pub mod config;
pub mod conversations;
pub mod error;
pub mod friends;
pub mod matching;
pub mod search;
pub mod session;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use assistant::{Assistant, AssistantLog, ChatCompletionsAssistant};
pub use config::{AppConfig, AssistantConfig, MatchConfig};
pub use conversations::{DirectChats, GroupChats, ThreadList};
pub use error::{AssistantError, AuthError, ScoreError, StoreError};
pub use friends::FriendList;
pub use matching::{CompatibilityScorer, Decision, Deck, DeckEntry, DeckState, Scorer, SwipeOutcome};
pub use search::SynonymIndex;
pub use session::Session;
pub use store::{AccountRegistry, JsonFileStore, MemoryStore, ProfileStore, ThreadStore};
pub use types::{
    AppResult, Criterion, DirectThread, GroupId, GroupThread, Message, MessageContent, Profile,
    ScoreBreakdown, Viewer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
