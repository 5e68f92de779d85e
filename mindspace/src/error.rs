//! Error types for MindSpace
//!
//! All errors use thiserror for structured error handling.
//! These errors can be serialized to the view layer.

use crate::validation::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Please fix the errors in the form: {0}")]
    Validation(FieldErrors),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("An account with this email already exists: {0}")]
    DuplicateEmail(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Please log in to access this page")]
    NotAuthenticated,

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Assessment incomplete: {answered} of {total} questions answered")]
    IncompleteAssessment { answered: usize, total: usize },

    #[error("Record store error: {0}")]
    Storage(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("{0}")]
    Generic(String),
}

impl AppError {
    pub fn journal_not_found(id: impl Into<String>) -> Self {
        AppError::NotFound {
            entity: "Journal entry",
            id: id.into(),
        }
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
