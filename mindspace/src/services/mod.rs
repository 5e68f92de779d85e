//! Services module
//!
//! Business logic services that coordinate between commands and repository.

pub mod auth;
pub mod journal;
pub mod mood;
pub mod session;
pub mod stress;

pub use auth::AuthService;
pub use journal::JournalService;
pub use mood::MoodService;
pub use session::SessionManager;
pub use stress::{Answer, StressAssessment, StressLevel, StressReport, StressService};
