//! Record models
//!
//! Rust structs representing stored entities and the form inputs that
//! produce them. Stored records serialize with camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    /// Argon2id PHC string
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Marker that this device currently has a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub name: String,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// A free-form journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Time-ordered UUID, assigned at creation
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    pub date: DateTime<Utc>,
}

/// Self-reported mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Down,
    Struggling,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Great, Mood::Good, Mood::Okay, Mood::Down, Mood::Struggling];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Down => "down",
            Mood::Struggling => "struggling",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Down => "Down",
            Mood::Struggling => "Struggling",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == needle)
            .ok_or_else(|| format!("Unknown mood: {}", s))
    }
}

/// One mood log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Mood,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Outcome of a completed stress assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressResult {
    pub date: DateTime<Utc>,
    pub score: u32,
    pub max_score: u32,
}

impl StressResult {
    /// Score as a percentage of the maximum
    pub fn percentage(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.max_score) * 100.0
    }
}

// ===== Form inputs =====

/// Sign-in form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Account creation form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Journal create/edit form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalForm {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub mood: Option<String>,
}

// ===== Repository requests =====

/// Create user request; the password is already hashed
#[derive(Debug)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Create journal entry request, with normalized fields
#[derive(Debug)]
pub struct CreateJournalRequest {
    pub title: String,
    pub content: String,
    pub mood: Option<String>,
}

/// Update journal entry request; replaces every editable field
#[derive(Debug)]
pub struct UpdateJournalRequest {
    pub id: String,
    pub title: String,
    pub content: String,
    pub mood: Option<String>,
}
