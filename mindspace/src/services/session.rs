//! Session manager
//!
//! Tracks whether a user is signed in on this device. The session is a
//! plain marker record: present means authenticated, absent means anonymous.
//! There is no expiry.

use crate::database::{Repository, Session};
use crate::error::{AppError, Result};

/// Service for the current session
#[derive(Clone)]
pub struct SessionManager {
    repo: Repository,
}

impl SessionManager {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Mark `email` as signed in, replacing any previous session
    pub fn login(&self, email: &str, name: &str) -> Result<Session> {
        let session = Session {
            email: email.to_string(),
            name: name.to_string(),
        };

        self.repo.set_session(&session)?;

        tracing::info!("Session started for: {}", session.email);
        Ok(session)
    }

    /// End the current session; signing out while anonymous is a no-op
    pub fn logout(&self) -> Result<()> {
        self.repo.clear_session()?;
        tracing::info!("Session ended");
        Ok(())
    }

    pub fn current_session(&self) -> Result<Option<Session>> {
        self.repo.get_session()
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.current_session()?.is_some())
    }

    /// Guard for protected views: the current session, or `NotAuthenticated`
    pub fn require_session(&self) -> Result<Session> {
        self.current_session()?.ok_or(AppError::NotAuthenticated)
    }
}
