//! Environment-driven configuration
//!
//! Environment:
//! - STUDY_MATCH_DATA_FILE: snapshot path (relative to the current directory
//!   unless absolute, default `study-match.json`)
//! - STUDY_MATCH_THRESHOLD: minimum score to enter a deck (default 50)
//! - STUDY_MATCH_EXCLUDE_PASSED: `true`/`1` to keep rejected candidates out of
//!   rebuilt decks for the rest of the session (default false)
//! - STUDY_MATCH_BCRYPT_COST: password hash cost (default bcrypt's)
//! - OPENAI_API_KEY: assistant credential (optional)
//! - STUDY_MATCH_ASSISTANT_MODEL / STUDY_MATCH_ASSISTANT_URL: assistant endpoint

use std::env;
use std::path::{Path, PathBuf};

use tracing::warn;

pub const DEFAULT_DATA_FILE: &str = "study-match.json";
pub const DEFAULT_THRESHOLD: f64 = 50.0;
pub const DEFAULT_ASSISTANT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_ASSISTANT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Deck construction settings
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    /// Candidates scoring below this never enter a deck
    pub threshold: f64,
    /// Skip candidates rejected earlier in the session when rebuilding
    pub exclude_passed: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            exclude_passed: false,
        }
    }
}

/// Assistant endpoint settings
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub url: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_ASSISTANT_MODEL.to_string(),
            url: DEFAULT_ASSISTANT_URL.to_string(),
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub matching: MatchConfig,
    pub bcrypt_cost: u32,
    pub assistant: AssistantConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            matching: MatchConfig::default(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            assistant: AssistantConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        if let Some(path) = lookup("STUDY_MATCH_DATA_FILE") {
            config.data_file = resolve_path(&current_dir, &path);
        } else {
            config.data_file = current_dir.join(DEFAULT_DATA_FILE);
        }

        if let Some(raw) = lookup("STUDY_MATCH_THRESHOLD") {
            match raw.trim().parse::<f64>() {
                Ok(value) if (0.0..=100.0).contains(&value) => config.matching.threshold = value,
                _ => warn!(value = %raw, "ignoring invalid STUDY_MATCH_THRESHOLD"),
            }
        }

        if let Some(raw) = lookup("STUDY_MATCH_EXCLUDE_PASSED") {
            match parse_flag(&raw) {
                Some(flag) => config.matching.exclude_passed = flag,
                None => warn!(value = %raw, "ignoring invalid STUDY_MATCH_EXCLUDE_PASSED"),
            }
        }

        if let Some(raw) = lookup("STUDY_MATCH_BCRYPT_COST") {
            match raw.trim().parse::<u32>() {
                Ok(cost) if (4..=31).contains(&cost) => config.bcrypt_cost = cost,
                _ => warn!(value = %raw, "ignoring invalid STUDY_MATCH_BCRYPT_COST"),
            }
        }

        config.assistant.api_key = lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty());
        if let Some(model) = lookup("STUDY_MATCH_ASSISTANT_MODEL") {
            config.assistant.model = model;
        }
        if let Some(url) = lookup("STUDY_MATCH_ASSISTANT_URL") {
            config.assistant.url = url;
        }

        config
    }
}

fn resolve_path(base: &Path, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
