//! Persisted state layout
//!
//! Every collection lives under one fixed key in the record store, as a
//! single JSON document:
//!
//! ```text
//! users              → [User]                 registration order
//! currentUser        → Session | absent
//! journalEntries     → [JournalEntry]         newest first
//! moodHistory        → [MoodEntry]            newest first, at most 30
//! stressTestHistory  → [StressResult]         newest first, at most 10
//! ```

use std::fmt;

/// Fixed keys of the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Users,
    CurrentUser,
    JournalEntries,
    MoodHistory,
    StressTestHistory,
}

impl StoreKey {
    pub const ALL: [StoreKey; 5] = [
        StoreKey::Users,
        StoreKey::CurrentUser,
        StoreKey::JournalEntries,
        StoreKey::MoodHistory,
        StoreKey::StressTestHistory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StoreKey::Users => "users",
            StoreKey::CurrentUser => "currentUser",
            StoreKey::JournalEntries => "journalEntries",
            StoreKey::MoodHistory => "moodHistory",
            StoreKey::StressTestHistory => "stressTestHistory",
        }
    }

    /// Maximum collection length, for capped collections
    pub fn cap(self) -> Option<usize> {
        match self {
            StoreKey::MoodHistory => Some(crate::config::MOOD_HISTORY_CAP),
            StoreKey::StressTestHistory => Some(crate::config::STRESS_HISTORY_CAP),
            _ => None,
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
