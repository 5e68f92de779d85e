//! Commands exposed to the view layer
//!
//! This module organizes commands into logical submodules:
//! - `auth`: Registration, sign-in and sign-out
//! - `journal`: Journal CRUD operations and search
//! - `mood`: Mood logging
//! - `stress`: Stress self-assessment
//!
//! Everything outside `auth` belongs to the dashboard and requires a
//! signed-in session.

pub mod auth;
pub mod journal;
pub mod mood;
pub mod stress;

use crate::app::AppState;
use crate::database::Session;
use crate::error::Result;

// Re-export all commands for convenient dispatch
pub use auth::*;
pub use journal::*;
pub use mood::*;
pub use stress::*;

/// Route guard for dashboard commands
pub(crate) fn require_session(state: &AppState) -> Result<Session> {
    state.sessions.require_session()
}

/// Application information structure
#[derive(serde::Serialize)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Get application information
pub fn get_app_info() -> AppInfo {
    AppInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    }
}
