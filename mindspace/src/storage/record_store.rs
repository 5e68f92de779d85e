//! Key-value record store
//!
//! The persistence seam every service depends on. Values are opaque JSON
//! documents addressed by a fixed string key; typed access lives in
//! [`crate::database::Repository`].

use crate::error::{AppError, Result};
use std::collections::HashMap;
use std::sync::RwLock;

/// Key-value storage of serialized collections.
///
/// Each call is synchronous and replaces the whole value for a key. There is
/// no atomicity across keys; concurrent writers to the same key are
/// last-write-wins.
pub trait RecordStore: Send + Sync {
    /// Raw value stored under `key`, or `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key succeeds
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory record store, used for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently holding a value
    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Storage("memory store lock poisoned".to_string())
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
