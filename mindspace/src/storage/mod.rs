//! Storage module
//!
//! Provides the key-value record store backing every collection.

pub mod file_store;
pub mod record_store;

pub use file_store::FileStore;
pub use record_store::{MemoryStore, RecordStore};
