//! Integration tests for MindSpace
//!
//! These tests verify end-to-end functionality including:
//! - Account registration, sign-in and sign-out
//! - Journal, mood and stress flows through the command layer
//! - Persistence of every collection across restarts

use mindspace::app::{setup, AppState};
use mindspace::commands;
use mindspace::database::{
    JournalForm, LoginForm, Mood, MoodEntry, RegistrationForm, Repository, StoreKey,
    StressResult,
};
use mindspace::error::AppError;
use mindspace::storage::{FileStore, RecordStore};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

/// Helper to create app state over a file store in a temp directory
fn create_test_state() -> (AppState, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let state = setup(temp_dir.path()).unwrap().with_auth_latency(Duration::ZERO);

    (state, temp_dir)
}

fn ada() -> RegistrationForm {
    RegistrationForm {
        name: "Ada".to_string(),
        email: "ada@uni.edu".to_string(),
        password: "Passw0rd".to_string(),
        confirm_password: "Passw0rd".to_string(),
    }
}

#[tokio::test]
async fn test_register_logout_login_scenario() {
    let (state, temp) = create_test_state();
    let cancel = CancellationToken::new();
    let store = FileStore::new(temp.path().join("records"));

    // Register
    let session = commands::register(&state, ada(), &cancel).await.unwrap();
    assert_eq!(session.email, "ada@uni.edu");
    assert_eq!(session.name, "Ada");

    let users: serde_json::Value =
        serde_json::from_str(&store.get("users").unwrap().unwrap()).unwrap();
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert_eq!(users[0]["email"], "ada@uni.edu");
    assert!(users[0]["createdAt"].is_string());
    assert!(users[0].get("password").is_none());

    let current: serde_json::Value =
        serde_json::from_str(&store.get("currentUser").unwrap().unwrap()).unwrap();
    assert_eq!(
        current,
        serde_json::json!({ "email": "ada@uni.edu", "name": "Ada" })
    );

    // Logout
    commands::logout(&state).unwrap();
    assert_eq!(commands::current_user(&state).unwrap(), None);

    // Wrong password
    let result = commands::login(
        &state,
        LoginForm {
            email: "ada@uni.edu".to_string(),
            password: "Wrong0ne".to_string(),
        },
        &cancel,
    )
    .await;
    assert!(matches!(result, Err(AppError::InvalidCredentials)));
    assert_eq!(commands::current_user(&state).unwrap(), None);

    // Right password
    let session = commands::login(
        &state,
        LoginForm {
            email: "ada@uni.edu".to_string(),
            password: "Passw0rd".to_string(),
        },
        &cancel,
    )
    .await
    .unwrap();
    assert_eq!(session.name, "Ada");
}

#[tokio::test]
async fn test_distinct_users_then_duplicate() {
    let (state, temp) = create_test_state();
    let cancel = CancellationToken::new();
    let store = FileStore::new(temp.path().join("records"));

    commands::register(&state, ada(), &cancel).await.unwrap();
    commands::register(
        &state,
        RegistrationForm {
            name: "Grace".to_string(),
            email: "grace@uni.edu".to_string(),
            password: "C0bolRules".to_string(),
            confirm_password: "C0bolRules".to_string(),
        },
        &cancel,
    )
    .await
    .unwrap();

    let users_before = store.get("users").unwrap();
    let session_before = store.get("currentUser").unwrap();

    let result = commands::register(
        &state,
        RegistrationForm {
            name: "Impostor".to_string(),
            ..ada()
        },
        &cancel,
    )
    .await;

    assert!(matches!(result, Err(AppError::DuplicateEmail(_))));
    assert_eq!(store.get("users").unwrap(), users_before);
    assert_eq!(store.get("currentUser").unwrap(), session_before);
}

#[tokio::test]
async fn test_dashboard_requires_session() {
    let (state, _temp) = create_test_state();

    assert!(matches!(
        commands::list_mood_history(&state),
        Err(AppError::NotAuthenticated)
    ));
    assert!(matches!(
        commands::list_journal_entries(&state),
        Err(AppError::NotAuthenticated)
    ));
    assert!(matches!(
        commands::list_stress_history(&state),
        Err(AppError::NotAuthenticated)
    ));
}

#[tokio::test]
async fn test_journal_flow() {
    let (state, temp) = create_test_state();
    let cancel = CancellationToken::new();
    let store = FileStore::new(temp.path().join("records"));
    commands::register(&state, ada(), &cancel).await.unwrap();

    // Title too short: rejected, nothing written
    let result = commands::create_journal_entry(
        &state,
        JournalForm {
            title: "Hi".to_string(),
            content: "This content is long enough".to_string(),
            mood: None,
        },
    );
    match result {
        Err(AppError::Validation(errors)) => assert!(errors.get("title").is_some()),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(store.get("journalEntries").unwrap(), None);

    // Valid entries appear newest first
    let first = commands::create_journal_entry(
        &state,
        JournalForm {
            title: "Abc".to_string(),
            content: "0123456789".to_string(),
            mood: None,
        },
    )
    .unwrap();
    let second = commands::create_journal_entry(
        &state,
        JournalForm {
            title: "T".repeat(100),
            content: "C".repeat(2000),
            mood: Some("hopeful".to_string()),
        },
    )
    .unwrap();

    let entries = commands::list_journal_entries(&state).unwrap();
    assert_eq!(entries, vec![second.clone(), first.clone()]);

    // Edit, then delete
    let edited = commands::update_journal_entry(
        &state,
        &first.id,
        JournalForm {
            title: "Edited".to_string(),
            content: "Edited content body".to_string(),
            mood: None,
        },
    )
    .unwrap();
    assert_eq!(edited.id, first.id);

    commands::delete_journal_entry(&state, &second.id).unwrap();
    assert_eq!(commands::list_journal_entries(&state).unwrap(), vec![edited]);

    // Deleting again reports not found and leaves the store alone
    let before = store.get("journalEntries").unwrap();
    let result = commands::delete_journal_entry(&state, &second.id);
    assert!(matches!(result, Err(AppError::NotFound { .. })));
    assert_eq!(store.get("journalEntries").unwrap(), before);
}

#[tokio::test]
async fn test_mood_flow_caps_history() {
    let (state, _temp) = create_test_state();
    let cancel = CancellationToken::new();
    commands::register(&state, ada(), &cancel).await.unwrap();

    for i in 0..31 {
        commands::log_mood(&state, Mood::Okay, Some(&format!("day {}", i))).unwrap();
    }

    let history = commands::list_mood_history(&state).unwrap();
    assert_eq!(history.len(), 30);
    assert_eq!(history[0].note.as_deref(), Some("day 30"));
    assert_eq!(history[29].note.as_deref(), Some("day 1"));
}

#[tokio::test]
async fn test_stress_all_very_often() {
    let (state, _temp) = create_test_state();
    let cancel = CancellationToken::new();
    commands::register(&state, ada(), &cancel).await.unwrap();

    let report = commands::submit_stress_assessment(&state, &[4; 8]).unwrap();

    assert_eq!(report.result.score, 32);
    assert_eq!(report.result.max_score, 32);
    assert_eq!(report.percentage, 100.0);
    assert_eq!(report.level.label(), "Very High");

    let history = commands::list_stress_history(&state).unwrap();
    assert_eq!(history.len(), 1);
}

#[test]
fn test_collections_persist_across_restart() {
    let temp_dir = TempDir::new().unwrap();
    let records = temp_dir.path().join("records");

    let moods = vec![
        MoodEntry {
            mood: Mood::Great,
            date: chrono::Utc::now(),
            note: Some("Finished my thesis".to_string()),
        },
        MoodEntry {
            mood: Mood::Down,
            date: chrono::Utc::now(),
            note: None,
        },
    ];
    let results = vec![StressResult {
        date: chrono::Utc::now(),
        score: 12,
        max_score: 32,
    }];

    {
        let repo = Repository::new(Arc::new(FileStore::new(records.clone())));
        repo.write_collection(StoreKey::MoodHistory, &moods).unwrap();
        repo.write_collection(StoreKey::StressTestHistory, &results)
            .unwrap();
    }

    let repo = Repository::new(Arc::new(FileStore::new(records)));
    assert_eq!(repo.list_mood_entries().unwrap(), moods);
    assert_eq!(repo.list_stress_results().unwrap(), results);
}

#[test]
fn test_hand_edited_store_fails_open() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path().to_path_buf());
    store.set("journalEntries", "[{\"id\": 1,").unwrap();

    let state = AppState::new(Arc::new(store));
    state.sessions.login("ada@uni.edu", "Ada").unwrap();

    assert!(commands::list_journal_entries(&state).unwrap().is_empty());

    // The next write replaces the corrupt value
    commands::create_journal_entry(
        &state,
        JournalForm {
            title: "Fresh start".to_string(),
            content: "Writing over the broken file".to_string(),
            mood: None,
        },
    )
    .unwrap();
    assert_eq!(commands::list_journal_entries(&state).unwrap().len(), 1);
}

#[test]
fn test_non_utf8_store_files_fail_open() {
    let temp_dir = TempDir::new().unwrap();
    let journal = temp_dir.path().join("journalEntries.json");
    std::fs::write(journal, [0xff, 0xfe, b'[', b']']).unwrap();
    std::fs::write(temp_dir.path().join("currentUser.json"), [0xff, 0xfe]).unwrap();

    let state = AppState::new(Arc::new(FileStore::new(temp_dir.path().to_path_buf())));

    // A corrupt session reads as signed out
    assert_eq!(commands::current_user(&state).unwrap(), None);
    assert!(matches!(
        commands::list_journal_entries(&state),
        Err(AppError::NotAuthenticated)
    ));

    state.sessions.login("ada@uni.edu", "Ada").unwrap();
    assert!(commands::list_journal_entries(&state).unwrap().is_empty());

    // The next write replaces the corrupt value
    commands::create_journal_entry(
        &state,
        JournalForm {
            title: "Fresh start".to_string(),
            content: "Writing over the unreadable file".to_string(),
            mood: None,
        },
    )
    .unwrap();
    assert_eq!(commands::list_journal_entries(&state).unwrap().len(), 1);
}
