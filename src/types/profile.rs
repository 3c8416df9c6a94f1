//! Profile types for students in the matching corpus

use serde::{Deserialize, Serialize};

use crate::friends::FriendList;
use crate::search::normalize;

/// A student profile as held by the profile store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(rename = "currentSchool", default)]
    pub current_school: String,
    #[serde(rename = "dreamSchool", default)]
    pub dream_school: String,
    #[serde(default)]
    pub major: String,
    /// Comma-separated free text, e.g. "Programming, AI"
    #[serde(rename = "studyInterest", default)]
    pub study_interest: String,
    #[serde(rename = "preferredTimeframe", default)]
    pub preferred_timeframe: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Profile {
    /// Create a profile with only a name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: 0,
            current_school: String::new(),
            dream_school: String::new(),
            major: String::new(),
            study_interest: String::new(),
            preferred_timeframe: String::new(),
            avatar: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_schools(mut self, current: impl Into<String>, dream: impl Into<String>) -> Self {
        self.current_school = current.into();
        self.dream_school = dream.into();
        self
    }

    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.major = major.into();
        self
    }

    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.study_interest = interest.into();
        self
    }

    pub fn with_timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.preferred_timeframe = timeframe.into();
        self
    }

    /// Split the study interest into normalized, non-empty tokens
    pub fn interest_tokens(&self) -> Vec<String> {
        split_interests(&self.study_interest)
    }
}

/// Split comma-separated interests into trimmed, lower-cased, non-empty
/// tokens. Blank pieces are dropped so they never match everything.
pub fn split_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize)
        .filter(|s| !s.is_empty())
        .collect()
}

/// The acting user: their own profile plus their friend list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewer {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub friends: FriendList,
}

impl Viewer {
    /// Create a viewer with no friends yet
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            bio: None,
            friends: FriendList::new(),
        }
    }

    /// Create a viewer with an initial friend list (duplicates collapse)
    pub fn with_friends<I, S>(profile: Profile, friends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            profile,
            bio: None,
            friends: friends.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_tokens_trim_and_lowercase() {
        let profile = Profile::new("Sam").with_interest(" Data analysis, ML ,, Statistics ");
        assert_eq!(
            profile.interest_tokens(),
            vec!["data analysis", "ml", "statistics"]
        );
    }

    #[test]
    fn test_empty_interest_has_no_tokens() {
        assert!(Profile::new("Nobody").interest_tokens().is_empty());
    }

    #[test]
    fn test_viewer_serializes_flat() {
        let viewer = Viewer::with_friends(
            Profile::new("John Doe").with_major("Computer Science"),
            ["Alice Writer", "Bob Coder"],
        );
        let json = serde_json::to_value(&viewer).unwrap();
        assert_eq!(json["name"], "John Doe");
        assert_eq!(json["major"], "Computer Science");
        assert_eq!(json["friends"][1], "Bob Coder");

        let back: Viewer = serde_json::from_value(json).unwrap();
        assert_eq!(back, viewer);
    }
}
