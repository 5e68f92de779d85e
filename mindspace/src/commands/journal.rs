//! Journal commands
//!
//! CRUD operations and search for journal entries.

use super::require_session;
use crate::app::AppState;
use crate::database::{JournalEntry, JournalForm};
use crate::error::Result;

/// Create a new journal entry
pub fn create_journal_entry(state: &AppState, form: JournalForm) -> Result<JournalEntry> {
    require_session(state)?;
    state.journal_service.create_entry(form)
}

/// Get a journal entry by ID
pub fn get_journal_entry(state: &AppState, id: &str) -> Result<JournalEntry> {
    require_session(state)?;
    state.journal_service.get_entry(id)
}

/// List all journal entries, newest first
pub fn list_journal_entries(state: &AppState) -> Result<Vec<JournalEntry>> {
    require_session(state)?;
    state.journal_service.list_entries()
}

/// Update a journal entry
pub fn update_journal_entry(state: &AppState, id: &str, form: JournalForm) -> Result<JournalEntry> {
    require_session(state)?;
    state.journal_service.update_entry(id, form)
}

/// Delete a journal entry
pub fn delete_journal_entry(state: &AppState, id: &str) -> Result<()> {
    require_session(state)?;
    state.journal_service.delete_entry(id)
}

/// Search journal entries
pub fn search_journal_entries(state: &AppState, query: &str) -> Result<Vec<JournalEntry>> {
    require_session(state)?;
    state.journal_service.search_entries(query)
}
