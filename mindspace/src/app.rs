//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are built over one shared record store and made available
//! through AppState.

use crate::database::Repository;
use crate::error::Result;
use crate::services::{AuthService, JournalService, MoodService, SessionManager, StressService};
use crate::storage::{FileStore, MemoryStore, RecordStore};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionManager,
    pub auth_service: AuthService,
    pub journal_service: JournalService,
    pub mood_service: MoodService,
    pub stress_service: StressService,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let repo = Repository::new(store);
        let sessions = SessionManager::new(repo.clone());

        Self {
            auth_service: AuthService::new(repo.clone(), sessions.clone()),
            journal_service: JournalService::new(repo.clone()),
            mood_service: MoodService::new(repo.clone()),
            stress_service: StressService::new(repo),
            sessions,
        }
    }

    /// State over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Override the simulated sign-in delay
    pub fn with_auth_latency(mut self, latency: Duration) -> Self {
        self.auth_service = self.auth_service.with_latency(latency);
        self
    }
}

/// Application setup - called once on startup
pub fn setup(app_data_dir: &Path) -> Result<AppState> {
    tracing::info!("Initializing application");
    tracing::info!("App data directory: {:?}", app_data_dir);

    std::fs::create_dir_all(app_data_dir)?;

    let store = FileStore::new(app_data_dir.join("records"));
    store.initialize()?;

    let state = AppState::new(Arc::new(store));

    tracing::info!("Application initialized successfully");

    Ok(state)
}
