//! Application configuration constants
//!
//! Central location for collection caps, validation boundaries
//! and runtime defaults used throughout the application.

use std::path::PathBuf;
use std::time::Duration;

// ===== Collection Caps =====

/// Maximum number of mood entries kept; older entries are evicted
pub const MOOD_HISTORY_CAP: usize = 30;

/// Maximum number of stress assessment results kept
pub const STRESS_HISTORY_CAP: usize = 10;

// ===== Account Validation =====

/// Minimum trimmed length of a display name
pub const NAME_MIN_LEN: usize = 2;

/// Minimum password length for both login and registration
pub const PASSWORD_MIN_LEN: usize = 6;

// ===== Journal Validation =====

pub const JOURNAL_TITLE_MIN_LEN: usize = 3;
pub const JOURNAL_TITLE_MAX_LEN: usize = 100;

pub const JOURNAL_CONTENT_MIN_LEN: usize = 10;
pub const JOURNAL_CONTENT_MAX_LEN: usize = 2000;

/// Journal mood tags longer than this are truncated on input
pub const JOURNAL_MOOD_MAX_LEN: usize = 50;

// ===== Mood Tracking =====

/// Mood notes longer than this are truncated on input
pub const MOOD_NOTE_MAX_LEN: usize = 500;

// ===== Stress Assessment =====

/// Highest value a single questionnaire answer can contribute
pub const STRESS_ANSWER_MAX: u32 = 4;

// ===== Runtime =====

/// Simulated round-trip delay applied to login and registration (1 second)
pub const SIMULATED_AUTH_LATENCY: Duration = Duration::from_millis(1000);

/// Environment variable overriding the data directory used by the CLI
pub const DATA_DIR_ENV: &str = "MINDSPACE_DATA_DIR";

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "mindspace-data";

/// Resolve the data directory from the environment or fall back to the default
pub fn data_dir() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}
