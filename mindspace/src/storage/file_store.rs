//! File-backed record store
//!
//! Each key is stored as a single JSON document at `<root>/<key>.json`.
//! Writes go to a temp file first and are renamed into place, so a reader
//! never observes a partially written value.

use super::RecordStore;
use crate::error::{AppError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Record store persisting one file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Initialize the store (create directory if needed)
    pub fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        tracing::info!("Record store initialized at: {:?}", self.root);
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get file path for a key
    fn get_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(AppError::Storage(format!("Invalid record key: {:?}", key)));
        }

        Ok(self.root.join(format!("{}.json", key)))
    }
}

fn write_temp(temp_path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()
}

impl RecordStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.get_path(key)?;

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // A value that is not text reads as absent, like any other corrupt value
        match String::from_utf8(bytes) {
            Ok(content) => Ok(Some(content)),
            Err(e) => {
                tracing::warn!("Discarding non-UTF-8 record {}: {}", key, e);
                Ok(None)
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.get_path(key)?;
        fs::create_dir_all(&self.root)?;

        let temp_path = path.with_extension("json.tmp");
        let written = write_temp(&temp_path, value).and_then(|()| fs::rename(&temp_path, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::debug!("Wrote record: {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.get_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Removed record: {}", key);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
