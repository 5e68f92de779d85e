//! Mood tracking service

use crate::config::MOOD_NOTE_MAX_LEN;
use crate::database::{Mood, MoodEntry, Repository};
use crate::error::Result;
use crate::validation::normalize_optional;

/// Service for logging moods
#[derive(Clone)]
pub struct MoodService {
    repo: Repository,
}

impl MoodService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Log a mood with an optional note. Blank notes are dropped and long
    /// notes are cut to the maximum length.
    pub fn log_mood(&self, mood: Mood, note: Option<&str>) -> Result<MoodEntry> {
        let note = normalize_optional(note, MOOD_NOTE_MAX_LEN);
        let entry = self.repo.create_mood_entry(mood, note)?;

        tracing::info!("Mood logged: {}", mood.as_str());
        Ok(entry)
    }

    /// Recent moods, newest first
    pub fn history(&self) -> Result<Vec<MoodEntry>> {
        self.repo.list_mood_entries()
    }
}
