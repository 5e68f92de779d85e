//! Repository layer over the record store
//!
//! This module provides typed CRUD operations for all collections.
//! Every operation reads the whole collection, changes it in memory and
//! writes the whole collection back.

use super::models::*;
use super::schema::StoreKey;
use crate::error::{AppError, Result};
use crate::storage::RecordStore;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Repository for record store operations
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn RecordStore>,
}

/// Insert `item` at the front, then drop entries beyond `cap`
fn prepend_capped<T>(items: &mut Vec<T>, item: T, cap: Option<usize>) {
    items.insert(0, item);
    if let Some(cap) = cap {
        items.truncate(cap);
    }
}

impl Repository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Read a collection. Absent keys and unparseable values both read as
    /// empty; the latter is logged.
    pub fn read_collection<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Vec<T>> {
        let Some(raw) = self.store.get(key.as_str())? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!("Discarding unreadable collection {}: {}", key, e);
                Ok(Vec::new())
            }
        }
    }

    /// Replace a collection
    pub fn write_collection<T: Serialize>(&self, key: StoreKey, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.store.set(key.as_str(), &json)?;

        tracing::debug!("Wrote collection {} ({} records)", key, items.len());
        Ok(())
    }

    // ===== Users =====

    /// List all registered users
    pub fn list_users(&self) -> Result<Vec<User>> {
        self.read_collection(StoreKey::Users)
    }

    /// Find a user by exact email
    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.list_users()?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    /// Create a user, rejecting duplicate emails without writing
    pub fn create_user(&self, req: CreateUserRequest) -> Result<User> {
        let mut users = self.list_users()?;

        if users.iter().any(|u| u.email == req.email) {
            return Err(AppError::DuplicateEmail(req.email));
        }

        let user = User {
            name: req.name,
            email: req.email,
            password_hash: req.password_hash,
            created_at: Utc::now(),
        };

        users.push(user.clone());
        self.write_collection(StoreKey::Users, &users)?;

        tracing::debug!("Created user: {}", user.email);
        Ok(user)
    }

    // ===== Session =====

    /// Current session, if any. An unreadable session is treated as absent.
    pub fn get_session(&self) -> Result<Option<Session>> {
        let key = StoreKey::CurrentUser;
        let Some(raw) = self.store.get(key.as_str())? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!("Discarding unreadable {}: {}", key, e);
                Ok(None)
            }
        }
    }

    pub fn set_session(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string(session)?;
        self.store.set(StoreKey::CurrentUser.as_str(), &json)?;

        tracing::debug!("Set session for: {}", session.email);
        Ok(())
    }

    pub fn clear_session(&self) -> Result<()> {
        self.store.remove(StoreKey::CurrentUser.as_str())?;

        tracing::debug!("Cleared session");
        Ok(())
    }

    // ===== Journal =====

    /// List journal entries, newest first
    pub fn list_journal_entries(&self) -> Result<Vec<JournalEntry>> {
        self.read_collection(StoreKey::JournalEntries)
    }

    /// Get a journal entry by ID
    pub fn get_journal_entry(&self, id: &str) -> Result<JournalEntry> {
        self.list_journal_entries()?
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| AppError::journal_not_found(id))
    }

    /// Create a journal entry at the front of the collection
    pub fn create_journal_entry(&self, req: CreateJournalRequest) -> Result<JournalEntry> {
        let mut entries = self.list_journal_entries()?;

        let entry = JournalEntry {
            id: Uuid::now_v7().to_string(),
            title: req.title,
            content: req.content,
            mood: req.mood,
            date: Utc::now(),
        };

        prepend_capped(&mut entries, entry.clone(), StoreKey::JournalEntries.cap());
        self.write_collection(StoreKey::JournalEntries, &entries)?;

        tracing::debug!("Created journal entry: {}", entry.id);
        Ok(entry)
    }

    /// Replace the editable fields of a journal entry; id and date are kept
    pub fn update_journal_entry(&self, req: UpdateJournalRequest) -> Result<JournalEntry> {
        let mut entries = self.list_journal_entries()?;

        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == req.id)
            .ok_or_else(|| AppError::journal_not_found(&req.id))?;

        entry.title = req.title;
        entry.content = req.content;
        entry.mood = req.mood;
        let updated = entry.clone();

        self.write_collection(StoreKey::JournalEntries, &entries)?;

        tracing::debug!("Updated journal entry: {}", updated.id);
        Ok(updated)
    }

    /// Delete a journal entry
    pub fn delete_journal_entry(&self, id: &str) -> Result<()> {
        let mut entries = self.list_journal_entries()?;
        let before = entries.len();

        entries.retain(|entry| entry.id != id);

        if entries.len() == before {
            return Err(AppError::journal_not_found(id));
        }

        self.write_collection(StoreKey::JournalEntries, &entries)?;

        tracing::debug!("Deleted journal entry: {}", id);
        Ok(())
    }

    // ===== Mood =====

    /// List mood entries, newest first
    pub fn list_mood_entries(&self) -> Result<Vec<MoodEntry>> {
        self.read_collection(StoreKey::MoodHistory)
    }

    /// Record a mood entry, evicting the oldest beyond the cap
    pub fn create_mood_entry(&self, mood: Mood, note: Option<String>) -> Result<MoodEntry> {
        let mut entries = self.list_mood_entries()?;

        let entry = MoodEntry {
            mood,
            date: Utc::now(),
            note,
        };

        prepend_capped(&mut entries, entry.clone(), StoreKey::MoodHistory.cap());
        self.write_collection(StoreKey::MoodHistory, &entries)?;

        tracing::debug!("Created mood entry: {}", mood.as_str());
        Ok(entry)
    }

    // ===== Stress =====

    /// List stress assessment results, newest first
    pub fn list_stress_results(&self) -> Result<Vec<StressResult>> {
        self.read_collection(StoreKey::StressTestHistory)
    }

    /// Record a stress result, evicting the oldest beyond the cap
    pub fn create_stress_result(&self, score: u32, max_score: u32) -> Result<StressResult> {
        let mut results = self.list_stress_results()?;

        let result = StressResult {
            date: Utc::now(),
            score,
            max_score,
        };

        prepend_capped(&mut results, result.clone(), StoreKey::StressTestHistory.cap());
        self.write_collection(StoreKey::StressTestHistory, &results)?;

        tracing::debug!("Recorded stress result: {}/{}", score, max_score);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn create_test_repo() -> (Repository, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (Repository::new(store.clone()), store)
    }

    fn journal_request(title: &str) -> CreateJournalRequest {
        CreateJournalRequest {
            title: title.to_string(),
            content: "Some thoughts about today".to_string(),
            mood: None,
        }
    }

    #[test]
    fn test_missing_collection_reads_empty() {
        let (repo, _store) = create_test_repo();
        assert!(repo.list_journal_entries().unwrap().is_empty());
        assert!(repo.get_session().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_collection_reads_empty() {
        let (repo, store) = create_test_repo();
        store.set("moodHistory", "{not json").unwrap();
        store.set("currentUser", "[1, 2]").unwrap();

        assert!(repo.list_mood_entries().unwrap().is_empty());
        assert!(repo.get_session().unwrap().is_none());
    }

    #[test]
    fn test_create_user_rejects_duplicate() {
        let (repo, store) = create_test_repo();

        repo.create_user(CreateUserRequest {
            name: "Ada".to_string(),
            email: "ada@uni.edu".to_string(),
            password_hash: "hash".to_string(),
        })
        .unwrap();
        let before = store.get("users").unwrap();

        let result = repo.create_user(CreateUserRequest {
            name: "Other Ada".to_string(),
            email: "ada@uni.edu".to_string(),
            password_hash: "hash2".to_string(),
        });

        assert!(matches!(result, Err(AppError::DuplicateEmail(_))));
        assert_eq!(store.get("users").unwrap(), before);
        assert_eq!(repo.list_users().unwrap().len(), 1);
    }

    #[test]
    fn test_session_set_and_clear() {
        let (repo, _store) = create_test_repo();
        let session = Session {
            email: "ada@uni.edu".to_string(),
            name: "Ada".to_string(),
        };

        repo.set_session(&session).unwrap();
        assert_eq!(repo.get_session().unwrap(), Some(session));

        repo.clear_session().unwrap();
        assert_eq!(repo.get_session().unwrap(), None);
    }

    #[test]
    fn test_journal_newest_first() {
        let (repo, _store) = create_test_repo();

        repo.create_journal_entry(journal_request("First")).unwrap();
        let second = repo.create_journal_entry(journal_request("Second")).unwrap();

        let entries = repo.list_journal_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, second.id);
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn test_update_journal_entry() {
        let (repo, _store) = create_test_repo();
        let first = repo.create_journal_entry(journal_request("First")).unwrap();
        let second = repo.create_journal_entry(journal_request("Second")).unwrap();

        let updated = repo
            .update_journal_entry(UpdateJournalRequest {
                id: first.id.clone(),
                title: "Renamed".to_string(),
                content: "Rewritten thoughts".to_string(),
                mood: Some("calm".to_string()),
            })
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.date, first.date);

        let entries = repo.list_journal_entries().unwrap();
        assert_eq!(entries[0], second);
        assert_eq!(entries[1], updated);
    }

    #[test]
    fn test_update_missing_journal_entry() {
        let (repo, _store) = create_test_repo();

        let result = repo.update_journal_entry(UpdateJournalRequest {
            id: "missing".to_string(),
            title: "Title".to_string(),
            content: "Content here".to_string(),
            mood: None,
        });

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[test]
    fn test_delete_journal_entry() {
        let (repo, store) = create_test_repo();
        let entry = repo.create_journal_entry(journal_request("Doomed")).unwrap();
        repo.create_journal_entry(journal_request("Survivor")).unwrap();

        repo.delete_journal_entry(&entry.id).unwrap();
        let entries = repo.list_journal_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Survivor");

        let before = store.get("journalEntries").unwrap();
        let result = repo.delete_journal_entry(&entry.id);
        assert!(matches!(result, Err(AppError::NotFound { .. })));
        assert_eq!(store.get("journalEntries").unwrap(), before);
    }

    #[test]
    fn test_mood_history_capped() {
        let (repo, _store) = create_test_repo();

        for i in 0..31 {
            repo.create_mood_entry(Mood::Okay, Some(format!("entry {}", i)))
                .unwrap();
        }

        let entries = repo.list_mood_entries().unwrap();
        assert_eq!(entries.len(), 30);
        assert_eq!(entries[0].note.as_deref(), Some("entry 30"));
        assert_eq!(entries[29].note.as_deref(), Some("entry 1"));
    }

    #[test]
    fn test_stress_history_capped() {
        let (repo, _store) = create_test_repo();

        for score in 0..12 {
            repo.create_stress_result(score, 32).unwrap();
        }

        let results = repo.list_stress_results().unwrap();
        assert_eq!(results.len(), 10);
        assert_eq!(results[0].score, 11);
        assert_eq!(results[9].score, 2);
    }

    #[test]
    fn test_collection_round_trip() {
        let (repo, _store) = create_test_repo();
        let entries = vec![
            MoodEntry {
                mood: Mood::Great,
                date: Utc::now(),
                note: Some("Passed my exam".to_string()),
            },
            MoodEntry {
                mood: Mood::Struggling,
                date: Utc::now(),
                note: None,
            },
        ];

        repo.write_collection(StoreKey::MoodHistory, &entries).unwrap();
        let read: Vec<MoodEntry> = repo.read_collection(StoreKey::MoodHistory).unwrap();

        assert_eq!(read, entries);
    }
}
