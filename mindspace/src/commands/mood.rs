//! Mood commands

use super::require_session;
use crate::app::AppState;
use crate::database::{Mood, MoodEntry};
use crate::error::Result;

/// Log how the user feels right now
pub fn log_mood(state: &AppState, mood: Mood, note: Option<&str>) -> Result<MoodEntry> {
    require_session(state)?;
    state.mood_service.log_mood(mood, note)
}

/// Recent moods, newest first
pub fn list_mood_history(state: &AppState) -> Result<Vec<MoodEntry>> {
    require_session(state)?;
    state.mood_service.history()
}
