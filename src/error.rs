//! Error types for the fallible edges of the engine
//!
//! Matching and session operations never fail; these cover the store,
//! account, scoring and assistant boundaries.

use crate::utils::AtomicError;

/// Errors from profile and thread stores
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot write failed: {0}")]
    Atomic(#[from] AtomicError),

    #[error("no viewer profile in store")]
    NoViewer,

    #[error("account error: {0}")]
    Auth(#[from] AuthError),
}

/// Errors from signup and login
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("an account already exists for {0}")]
    EmailTaken(String),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Errors from a scorer that cannot evaluate a candidate
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("candidate has no name")]
    UnnamedCandidate,
}

/// Errors from the study assistant collaborator
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("assistant is not configured: {0}")]
    NotConfigured(String),

    #[error("assistant request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("assistant returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("message is empty")]
    EmptyMessage,
}

impl AssistantError {
    /// True when retrying cannot help until configuration changes
    pub fn is_configuration(&self) -> bool {
        matches!(self, AssistantError::NotConfigured(_))
    }
}
