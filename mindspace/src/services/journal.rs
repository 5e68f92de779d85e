//! Journal service
//!
//! High-level business logic for journal entries.
//! Validates form input and normalizes it before anything is stored.

use crate::config::JOURNAL_MOOD_MAX_LEN;
use crate::database::{
    CreateJournalRequest, JournalEntry, JournalForm, Repository, UpdateJournalRequest,
};
use crate::error::{AppError, Result};
use crate::validation::{normalize_optional, validate_journal};

/// Service for managing journal entries
#[derive(Clone)]
pub struct JournalService {
    repo: Repository,
}

impl JournalService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    fn check(form: &JournalForm) -> Result<()> {
        let errors = validate_journal(form);
        if errors.has_errors() {
            return Err(AppError::Validation(errors));
        }
        Ok(())
    }

    /// Create a new journal entry
    pub fn create_entry(&self, form: JournalForm) -> Result<JournalEntry> {
        Self::check(&form)?;

        tracing::info!("Creating journal entry: {}", form.title.trim());

        let entry = self.repo.create_journal_entry(CreateJournalRequest {
            title: form.title.trim().to_string(),
            content: form.content.trim().to_string(),
            mood: normalize_optional(form.mood.as_deref(), JOURNAL_MOOD_MAX_LEN),
        })?;

        tracing::info!("Journal entry created successfully: {}", entry.id);

        Ok(entry)
    }

    /// Get a journal entry by ID
    pub fn get_entry(&self, id: &str) -> Result<JournalEntry> {
        self.repo.get_journal_entry(id)
    }

    /// List all journal entries, newest first
    pub fn list_entries(&self) -> Result<Vec<JournalEntry>> {
        self.repo.list_journal_entries()
    }

    /// Update a journal entry
    pub fn update_entry(&self, id: &str, form: JournalForm) -> Result<JournalEntry> {
        Self::check(&form)?;

        tracing::debug!("Updating journal entry: {}", id);

        let entry = self.repo.update_journal_entry(UpdateJournalRequest {
            id: id.to_string(),
            title: form.title.trim().to_string(),
            content: form.content.trim().to_string(),
            mood: normalize_optional(form.mood.as_deref(), JOURNAL_MOOD_MAX_LEN),
        })?;

        tracing::debug!("Journal entry updated successfully: {}", entry.id);

        Ok(entry)
    }

    /// Delete a journal entry
    pub fn delete_entry(&self, id: &str) -> Result<()> {
        tracing::info!("Deleting journal entry: {}", id);

        self.repo.delete_journal_entry(id)?;

        tracing::info!("Journal entry deleted successfully: {}", id);

        Ok(())
    }

    /// Search entries by title, content or mood tag
    pub fn search_entries(&self, query: &str) -> Result<Vec<JournalEntry>> {
        let all_entries = self.list_entries()?;

        let query_lower = query.trim().to_lowercase();

        let filtered: Vec<JournalEntry> = all_entries
            .into_iter()
            .filter(|entry| {
                entry.title.to_lowercase().contains(&query_lower)
                    || entry.content.to_lowercase().contains(&query_lower)
                    || entry
                        .mood
                        .as_deref()
                        .is_some_and(|mood| mood.to_lowercase().contains(&query_lower))
            })
            .collect();

        Ok(filtered)
    }
}
