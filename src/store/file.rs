//! Whole-document JSON snapshot store

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::conversations::{DirectChats, GroupChats};
use crate::error::{AuthError, StoreError};
use crate::types::{Profile, Viewer};
use crate::utils::atomic::cleanup_temp_file;
use crate::utils::write_json_snapshot;

use super::seed::{demo_candidates, demo_viewer, DEMO_EMAIL, DEMO_PASSWORD};
use super::{without_viewer, AccountRegistry, ProfileStore, ThreadStore};

/// Everything persisted by the file store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDocument {
    #[serde(default)]
    pub viewer: Option<Viewer>,
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub group_chats: GroupChats,
    #[serde(default)]
    pub direct_chats: DirectChats,
    #[serde(default)]
    pub accounts: AccountRegistry,
    /// Email of the signed-in account, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_account: Option<String>,
}

impl StoreDocument {
    /// Document holding the demo corpus and its login
    pub fn seeded(bcrypt_cost: u32) -> Result<Self, StoreError> {
        let viewer = demo_viewer();
        let mut accounts = AccountRegistry::with_cost(bcrypt_cost);
        accounts.signup(DEMO_EMAIL, DEMO_PASSWORD, viewer.clone())?;

        Ok(Self {
            viewer: Some(viewer),
            profiles: demo_candidates(),
            group_chats: GroupChats::new(),
            direct_chats: DirectChats::new(),
            accounts,
            active_account: Some(DEMO_EMAIL.to_string()),
        })
    }
}

/// Store backed by a single JSON file, rewritten atomically on every save
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    document: StoreDocument,
}

impl JsonFileStore {
    /// Open the snapshot at `path`, seeding it with the demo corpus if it
    /// does not exist yet
    pub fn open<P: AsRef<Path>>(path: P, bcrypt_cost: u32) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if cleanup_temp_file(&path)? {
            warn!(path = %path.display(), "removed temp file from an interrupted write");
        }

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut document: StoreDocument = serde_json::from_str(&content)?;
            document.accounts.set_cost(bcrypt_cost);
            info!(
                path = %path.display(),
                profiles = document.profiles.len(),
                accounts = document.accounts.len(),
                "loaded store"
            );
            return Ok(Self { path, document });
        }

        let store = Self {
            document: StoreDocument::seeded(bcrypt_cost)?,
            path,
        };
        store.flush()?;
        info!(path = %store.path.display(), "seeded new store with demo data");
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &StoreDocument {
        &self.document
    }

    pub fn accounts(&self) -> &AccountRegistry {
        &self.document.accounts
    }

    /// Register an account, sign it in and save. The new viewer's profile
    /// joins the pool other users match against.
    pub fn signup(&mut self, email: &str, password: &str, viewer: Viewer) -> Result<(), StoreError> {
        let account = self.document.accounts.signup(email, password, viewer.clone())?;
        let email = account.email.clone();

        if !self.document.profiles.iter().any(|p| p.name == viewer.profile.name) {
            self.document.profiles.push(viewer.profile.clone());
        }
        self.document.viewer = Some(viewer);
        self.document.active_account = Some(email);
        self.flush()
    }

    /// Check credentials and make the account's viewer the current one
    pub fn login(&mut self, email: &str, password: &str) -> Result<Viewer, AuthError> {
        let viewer = self.document.accounts.login(email, password)?;
        self.document.active_account = self.document.accounts.find(email).map(|a| a.email.clone());
        self.document.viewer = Some(viewer.clone());
        Ok(viewer)
    }

    /// Email of the signed-in account
    pub fn active_account(&self) -> Option<&str> {
        self.document.active_account.as_deref()
    }

    fn flush(&self) -> Result<(), StoreError> {
        write_json_snapshot(&self.path, &self.document)?;
        Ok(())
    }
}

impl ProfileStore for JsonFileStore {
    fn viewer(&self) -> Result<Viewer, StoreError> {
        self.document.viewer.clone().ok_or(StoreError::NoViewer)
    }

    fn candidates(&self) -> Result<Vec<Profile>, StoreError> {
        let name = self.document.viewer.as_ref().map(Viewer::name);
        Ok(without_viewer(&self.document.profiles, name))
    }

    /// The account and pool entry are found through the previously stored
    /// viewer, so a renamed profile replaces its old entry
    fn persist(&mut self, viewer: &Viewer) -> Result<(), StoreError> {
        let previous = self
            .document
            .viewer
            .as_ref()
            .map(|v| v.name().to_string())
            .unwrap_or_else(|| viewer.name().to_string());

        let email = match self.document.active_account.clone() {
            Some(email) => Some(email),
            None => self.document.accounts.email_for(&previous).map(str::to_string),
        };
        if let Some(email) = &email {
            if !self.document.accounts.update(email, viewer) {
                warn!(email = %email, "signed-in account not found; viewer saved without it");
            }
        }
        self.document.active_account = email;

        if let Some(profile) = self
            .document
            .profiles
            .iter_mut()
            .find(|p| p.name == previous)
        {
            *profile = viewer.profile.clone();
        }
        self.document.viewer = Some(viewer.clone());
        self.flush()?;
        info!(viewer = %viewer.name(), friends = viewer.friends.len(), "persisted viewer");
        Ok(())
    }
}

impl ThreadStore for JsonFileStore {
    fn load_threads(&self) -> Result<(GroupChats, DirectChats), StoreError> {
        Ok((
            self.document.group_chats.clone(),
            self.document.direct_chats.clone(),
        ))
    }

    fn save_threads(&mut self, groups: &GroupChats, directs: &DirectChats) -> Result<(), StoreError> {
        self.document.group_chats = groups.clone();
        self.document.direct_chats = directs.clone();
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_open_seeds_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let store = JsonFileStore::open(&path, TEST_COST).unwrap();
        assert!(path.exists());
        assert_eq!(store.viewer().unwrap().name(), "John Doe");
        assert_eq!(store.candidates().unwrap().len(), 38);
        assert_eq!(store.accounts().len(), 1);
    }

    #[test]
    fn test_document_uses_camel_case_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        JsonFileStore::open(&path, TEST_COST).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(raw.get("groupChats").is_some());
        assert!(raw.get("directChats").is_some());
        assert_eq!(raw["viewer"]["currentSchool"], "Stanford University");
    }

    #[test]
    fn test_stale_temp_file_removed_on_open() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(path.with_extension("tmp"), b"partial").unwrap();

        JsonFileStore::open(&path, TEST_COST).unwrap();
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, b"{ not json").unwrap();

        let err = JsonFileStore::open(&path, TEST_COST).unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }
}
