//! Persistence boundaries
//!
//! Profile and thread storage sit behind two small traits so a session
//! can be driven from memory in tests and from a JSON snapshot file in
//! the binary.

mod accounts;
mod file;
pub mod seed;

use crate::conversations::{DirectChats, GroupChats};
use crate::error::StoreError;
use crate::types::{Profile, Viewer};

pub use accounts::{Account, AccountRegistry};
pub use file::{JsonFileStore, StoreDocument};

/// Source of the viewer and the candidate pool
pub trait ProfileStore {
    /// The signed-in user's profile
    fn viewer(&self) -> Result<Viewer, StoreError>;

    /// Every known profile except the viewer's own
    fn candidates(&self) -> Result<Vec<Profile>, StoreError>;

    /// Record an edited viewer (profile fields or friend list)
    fn persist(&mut self, viewer: &Viewer) -> Result<(), StoreError>;
}

/// Storage for group and direct threads
pub trait ThreadStore {
    fn load_threads(&self) -> Result<(GroupChats, DirectChats), StoreError>;

    fn save_threads(&mut self, groups: &GroupChats, directs: &DirectChats) -> Result<(), StoreError>;
}

/// Drop the viewer's own profile from a pool
pub(crate) fn without_viewer(profiles: &[Profile], viewer_name: Option<&str>) -> Vec<Profile> {
    profiles
        .iter()
        .filter(|p| Some(p.name.as_str()) != viewer_name)
        .cloned()
        .collect()
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    viewer: Option<Viewer>,
    profiles: Vec<Profile>,
    groups: GroupChats,
    directs: DirectChats,
}

impl MemoryStore {
    pub fn new(viewer: Viewer, profiles: Vec<Profile>) -> Self {
        Self {
            viewer: Some(viewer),
            profiles,
            groups: GroupChats::new(),
            directs: DirectChats::new(),
        }
    }

    /// Store holding the demo viewer and candidate corpus
    pub fn seeded() -> Self {
        Self::new(seed::demo_viewer(), seed::demo_candidates())
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }
}

impl ProfileStore for MemoryStore {
    fn viewer(&self) -> Result<Viewer, StoreError> {
        self.viewer.clone().ok_or(StoreError::NoViewer)
    }

    fn candidates(&self) -> Result<Vec<Profile>, StoreError> {
        let name = self.viewer.as_ref().map(Viewer::name);
        Ok(without_viewer(&self.profiles, name))
    }

    fn persist(&mut self, viewer: &Viewer) -> Result<(), StoreError> {
        self.viewer = Some(viewer.clone());
        Ok(())
    }
}

impl ThreadStore for MemoryStore {
    fn load_threads(&self) -> Result<(GroupChats, DirectChats), StoreError> {
        Ok((self.groups.clone(), self.directs.clone()))
    }

    fn save_threads(&mut self, groups: &GroupChats, directs: &DirectChats) -> Result<(), StoreError> {
        self.groups = groups.clone();
        self.directs = directs.clone();
        Ok(())
    }
}
