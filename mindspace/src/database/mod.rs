//! Database module
//!
//! This module provides typed access to the record store:
//! - Persisted layout (store keys)
//! - Model definitions
//! - Repository layer for CRUD operations

pub mod models;
pub mod repository;
pub mod schema;

pub use models::*;
pub use repository::Repository;
pub use schema::StoreKey;
