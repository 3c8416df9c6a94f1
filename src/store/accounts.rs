//! Account registry: signup and login over bcrypt password hashes

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AuthError;
use crate::types::Viewer;

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    #[serde(rename = "passwordHash")]
    pub password_hash: String,
    pub viewer: Viewer,
    #[serde(rename = "joinedDate")]
    pub joined: DateTime<Utc>,
}

fn default_cost() -> u32 {
    DEFAULT_COST
}

/// Registered accounts keyed by normalized email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
    #[serde(skip, default = "default_cost")]
    cost: u32,
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::with_cost(DEFAULT_COST)
    }
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry hashing new passwords at the given bcrypt cost
    pub fn with_cost(cost: u32) -> Self {
        Self {
            accounts: Vec::new(),
            cost,
        }
    }

    pub fn set_cost(&mut self, cost: u32) {
        self.cost = cost;
    }

    /// Register a new account
    pub fn signup(&mut self, email: &str, password: &str, viewer: Viewer) -> Result<&Account, AuthError> {
        let email = normalize_email(email);
        if self.find(&email).is_some() {
            return Err(AuthError::EmailTaken(email));
        }

        let password_hash = hash(password, self.cost)?;
        self.accounts.push(Account {
            email: email.clone(),
            password_hash,
            viewer,
            joined: Utc::now(),
        });
        info!(email = %email, "registered account");

        let index = self.accounts.len() - 1;
        Ok(&self.accounts[index])
    }

    /// Check credentials and return the account's viewer
    pub fn login(&self, email: &str, password: &str) -> Result<Viewer, AuthError> {
        let account = self
            .find(&normalize_email(email))
            .ok_or(AuthError::InvalidCredentials)?;

        if verify(password, &account.password_hash)? {
            Ok(account.viewer.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Replace the stored viewer of the account registered under `email`.
    ///
    /// Returns false if no account matches.
    pub fn update(&mut self, email: &str, viewer: &Viewer) -> bool {
        let email = normalize_email(email);
        match self.accounts.iter_mut().find(|a| a.email == email) {
            Some(account) => {
                account.viewer = viewer.clone();
                true
            }
            None => false,
        }
    }

    /// Email of the account whose stored viewer carries this profile name
    pub fn email_for(&self, name: &str) -> Option<&str> {
        self.accounts
            .iter()
            .find(|a| a.viewer.name() == name)
            .map(|a| a.email.as_str())
    }

    pub fn find(&self, email: &str) -> Option<&Account> {
        let email = normalize_email(email);
        self.accounts.iter().find(|a| a.email == email)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Profile;

    const TEST_COST: u32 = 4;

    fn viewer(name: &str) -> Viewer {
        Viewer::new(Profile::new(name).with_major("Biology"))
    }

    #[test]
    fn test_signup_then_login() {
        let mut registry = AccountRegistry::with_cost(TEST_COST);
        registry
            .signup("Emily@Example.com ", "s3cret", viewer("Emily"))
            .unwrap();

        let logged_in = registry.login("emily@example.com", "s3cret").unwrap();
        assert_eq!(logged_in.name(), "Emily");
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let mut registry = AccountRegistry::with_cost(TEST_COST);
        registry.signup("a@b.c", "pw", viewer("A")).unwrap();
        let err = registry.signup("A@B.C", "other", viewer("B")).unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_wrong_password_and_unknown_email() {
        let mut registry = AccountRegistry::with_cost(TEST_COST);
        registry.signup("a@b.c", "pw", viewer("A")).unwrap();

        assert!(matches!(
            registry.login("a@b.c", "nope"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            registry.login("x@y.z", "pw"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_password_not_stored_in_clear() {
        let mut registry = AccountRegistry::with_cost(TEST_COST);
        let account = registry.signup("a@b.c", "plain-text", viewer("A")).unwrap();
        assert!(!account.password_hash.contains("plain-text"));
    }

    #[test]
    fn test_update_replaces_viewer() {
        let mut registry = AccountRegistry::with_cost(TEST_COST);
        registry.signup("a@b.c", "pw", viewer("A")).unwrap();

        // a renamed profile still lands on the same account
        let mut edited = viewer("A. Renamed");
        edited.friends.add("Bob");
        assert!(registry.update("A@B.C", &edited));
        assert!(!registry.update("ghost@b.c", &viewer("Ghost")));

        let logged_in = registry.login("a@b.c", "pw").unwrap();
        assert_eq!(logged_in.name(), "A. Renamed");
        assert!(logged_in.friends.contains("Bob"));
        assert_eq!(registry.email_for("A. Renamed"), Some("a@b.c"));
        assert_eq!(registry.email_for("A"), None);
    }
}
