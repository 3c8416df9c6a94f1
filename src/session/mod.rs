//! Session context
//!
//! One `Session` per signed-in user. It owns the viewer, the candidate
//! pool, the cached deck and every conversation collection, and is the
//! only thing that mutates them. The deck is rebuilt lazily: any change to
//! the viewer or the pool drops the cached one, while an accept made
//! inside the deck keeps it (the cursor just moves on).

use std::collections::HashSet;

use tracing::{debug, info};

use crate::assistant::{Assistant, AssistantLog};
use crate::config::MatchConfig;
use crate::conversations::{DirectChats, GroupChats};
use crate::error::{AssistantError, StoreError};
use crate::matching::{CompatibilityScorer, Decision, Deck, Scorer, SwipeOutcome};
use crate::store::{ProfileStore, ThreadStore};
use crate::types::{AssistantTurn, GroupId, MessageContent, Profile, Viewer};
use crate::utils::{format_timestamp, Clock, SystemClock};

pub struct Session {
    viewer: Viewer,
    candidates: Vec<Profile>,
    scorer: Box<dyn Scorer + Send + Sync>,
    config: MatchConfig,
    clock: Box<dyn Clock>,
    deck: Option<Deck>,
    /// Names rejected during this session
    passed: HashSet<String>,
    groups: GroupChats,
    directs: DirectChats,
    assistant_log: AssistantLog,
}

impl Session {
    pub fn new(viewer: Viewer, candidates: Vec<Profile>, config: MatchConfig) -> Self {
        let candidates = drop_self(candidates, viewer.name());
        Self {
            viewer,
            candidates,
            scorer: Box::new(CompatibilityScorer::default()),
            config,
            clock: Box::new(SystemClock::new()),
            deck: None,
            passed: HashSet::new(),
            groups: GroupChats::new(),
            directs: DirectChats::new(),
            assistant_log: AssistantLog::new(),
        }
    }

    /// Start a session from whatever a store holds
    pub fn load<S>(store: &S, config: MatchConfig) -> Result<Self, StoreError>
    where
        S: ProfileStore + ThreadStore + ?Sized,
    {
        let viewer = store.viewer()?;
        let candidates = store.candidates()?;
        let (groups, directs) = store.load_threads()?;
        info!(
            viewer = %viewer.name(),
            candidates = candidates.len(),
            groups = groups.len(),
            directs = directs.len(),
            "session loaded"
        );

        let mut session = Self::new(viewer, candidates, config);
        session.groups = groups;
        session.directs = directs;
        Ok(session)
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_scorer<S: Scorer + Send + Sync + 'static>(mut self, scorer: S) -> Self {
        self.scorer = Box::new(scorer);
        self.deck = None;
        self
    }

    // --- matching ---

    /// The current deck, building it first if needed
    pub fn deck(&mut self) -> &Deck {
        if self.deck.is_none() {
            let built = self.build_deck();
            self.deck = Some(built);
        }
        self.deck.get_or_insert_with(Deck::default)
    }

    fn build_deck(&self) -> Deck {
        let excluded = if self.config.exclude_passed {
            self.passed.clone()
        } else {
            HashSet::new()
        };
        Deck::build_excluding(
            self.scorer.as_ref(),
            &self.viewer,
            &self.candidates,
            self.config.threshold,
            &excluded,
        )
    }

    /// Drop the cached deck so the next access rebuilds it from scratch
    pub fn invalidate_deck(&mut self) {
        if self.deck.take().is_some() {
            debug!("deck invalidated");
        }
    }

    /// Decide on the candidate on display. `None` once the deck is exhausted.
    pub fn swipe(&mut self, decision: Decision) -> Option<SwipeOutcome> {
        self.deck();
        let outcome = self
            .deck
            .as_mut()?
            .decide(decision, &mut self.viewer.friends)?;

        if decision == Decision::Reject {
            self.passed.insert(outcome.name.clone());
        }
        Some(outcome)
    }

    // --- friends and profile ---

    /// Befriend a name outside the swipe flow; returns true if it was new
    pub fn add_friend(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || !self.viewer.friends.add(name) {
            return false;
        }
        self.invalidate_deck();
        true
    }

    pub fn remove_friend(&mut self, name: &str) -> bool {
        if !self.viewer.friends.remove(name.trim()) {
            return false;
        }
        self.invalidate_deck();
        true
    }

    /// Replace the viewer's own profile fields; friends are kept
    pub fn update_profile(&mut self, profile: Profile) {
        self.viewer.profile = profile;
        self.candidates = drop_self(std::mem::take(&mut self.candidates), self.viewer.name());
        self.invalidate_deck();
    }

    pub fn set_bio(&mut self, bio: Option<String>) {
        self.viewer.bio = bio.filter(|b| !b.trim().is_empty());
    }

    pub fn replace_candidates(&mut self, candidates: Vec<Profile>) {
        self.candidates = drop_self(candidates, self.viewer.name());
        self.invalidate_deck();
    }

    /// Pool profiles of current friends, in friend order
    pub fn friend_profiles(&self) -> Vec<&Profile> {
        self.viewer
            .friends
            .iter()
            .filter_map(|name| self.candidates.iter().find(|p| p.name == name))
            .collect()
    }

    // --- conversations ---

    pub fn start_direct(&mut self, counterpart: &str) -> bool {
        let now = self.clock.now_millis();
        self.directs.start(counterpart, now)
    }

    pub fn send_direct(&mut self, counterpart: &str, content: MessageContent) -> bool {
        let now = self.clock.now_millis();
        let sent = self.directs.send(counterpart, content, now);
        if sent {
            debug!(to = counterpart, at = %format_timestamp(now), "direct message sent");
        }
        sent
    }

    /// Create a group with the given members. Names that are not friends
    /// are dropped; with none left nothing is created.
    pub fn create_group(&mut self, name: &str, members: &[String]) -> Option<GroupId> {
        let members: Vec<String> = members
            .iter()
            .filter(|m| self.viewer.friends.contains(m))
            .cloned()
            .collect();
        let now = self.clock.now_millis();
        self.groups.create(name, &members, now)
    }

    pub fn send_group(&mut self, id: GroupId, content: MessageContent) -> bool {
        let now = self.clock.now_millis();
        let sent = self.groups.send(id, content, now);
        if sent {
            debug!(group = %id, at = %format_timestamp(now), "group message sent");
        }
        sent
    }

    pub fn rename_group(&mut self, id: GroupId, name: &str) -> bool {
        self.groups.rename(id, name)
    }

    pub fn leave_group(&mut self, id: GroupId) -> bool {
        self.groups.remove(id).is_some()
    }

    // --- assistant ---

    pub async fn ask_assistant<A>(
        &mut self,
        assistant: &A,
        prompt: &str,
    ) -> Result<AssistantTurn, AssistantError>
    where
        A: Assistant + ?Sized,
    {
        self.assistant_log
            .send(assistant, prompt, self.clock.as_ref())
            .await
    }

    // --- persistence ---

    /// Write the viewer and both thread collections to a store
    pub fn save<S>(&self, store: &mut S) -> Result<(), StoreError>
    where
        S: ProfileStore + ThreadStore + ?Sized,
    {
        store.persist(&self.viewer)?;
        store.save_threads(&self.groups, &self.directs)?;
        Ok(())
    }

    // --- accessors ---

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn candidates(&self) -> &[Profile] {
        &self.candidates
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn passed(&self) -> &HashSet<String> {
        &self.passed
    }

    pub fn groups(&self) -> &GroupChats {
        &self.groups
    }

    pub fn directs(&self) -> &DirectChats {
        &self.directs
    }

    pub fn assistant_log(&self) -> &AssistantLog {
        &self.assistant_log
    }

    /// True if a deck is cached and will be reused by the next access
    pub fn has_deck(&self) -> bool {
        self.deck.is_some()
    }
}

fn drop_self(candidates: Vec<Profile>, viewer_name: &str) -> Vec<Profile> {
    candidates
        .into_iter()
        .filter(|p| p.name != viewer_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ManualClock;

    fn session() -> Session {
        let viewer = Viewer::with_friends(
            Profile::new("Me")
                .with_schools("Stanford University", "MIT")
                .with_major("Computer Science")
                .with_interest("Programming")
                .with_timeframe("Evenings"),
            ["Ana"],
        );
        let pool = vec![
            Profile::new("Me"),
            Profile::new("Ana").with_interest("Coding"),
            Profile::new("Ben")
                .with_schools("Stanford", "MIT")
                .with_major("Computer Science")
                .with_interest("Coding")
                .with_timeframe("Flexible"),
            Profile::new("Cat").with_interest("Painting"),
        ];
        Session::new(viewer, pool, MatchConfig::default()).with_clock(ManualClock::starting_at(100))
    }

    #[test]
    fn test_viewer_dropped_from_pool() {
        let s = session();
        assert!(s.candidates().iter().all(|p| p.name != "Me"));
    }

    #[test]
    fn test_deck_cached_until_invalidated() {
        let mut s = session();
        assert_eq!(s.deck().len(), 1);
        assert!(s.has_deck());

        assert!(s.add_friend("Zed"));
        assert!(!s.has_deck());

        assert!(!s.add_friend("Zed"));
        assert!(!s.has_deck());
    }

    #[test]
    fn test_friend_names_trimmed_on_add_and_remove() {
        let mut s = session();
        assert!(s.add_friend(" Zed "));
        assert!(s.viewer().friends.contains("Zed"));

        assert!(s.remove_friend(" Zed "));
        assert!(!s.viewer().friends.contains("Zed"));
        assert!(!s.remove_friend("Zed"));
    }

    #[test]
    fn test_accept_keeps_deck() {
        let mut s = session();
        let outcome = s.swipe(Decision::Accept).unwrap();
        assert_eq!(outcome.name, "Ben");
        assert!(outcome.befriended);
        assert!(s.has_deck());
        assert!(s.deck().is_exhausted());
        assert!(s.swipe(Decision::Accept).is_none());
    }

    #[test]
    fn test_group_members_restricted_to_friends() {
        let mut s = session();
        let id = s
            .create_group("Study", &["Ana".to_string(), "Stranger".to_string()])
            .unwrap();
        assert_eq!(s.groups().get(id).unwrap().members, vec!["Ana", "You"]);

        assert!(s.create_group("Nobody", &["Stranger".to_string()]).is_none());
    }

    #[test]
    fn test_friend_profiles_in_friend_order() {
        let mut s = session();
        s.add_friend("Cat");
        let names: Vec<&str> = s.friend_profiles().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Cat"]);
    }
}
