//! File-backed blob storage for Composable TodoMVC.
//!
//! This crate provides the production [`Storage`] backend: every key is one
//! JSON file inside a data directory, so the list saved under
//! `todos-javascript` lives in `<data_dir>/todos-javascript.json`.
//!
//! - Reads of a missing file return `None`
//! - Writes create the data directory on first use
//! - Writes go to a uniquely named temporary file in the same directory that
//!   is then renamed over the target, so a crash mid-write never leaves a
//!   half-written list and concurrent writers never share a temp file
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use todomvc_core::TodoRepository;
//! use todomvc_storage::FileStorage;
//!
//! let storage = Arc::new(FileStorage::new(".todomvc"));
//! let repository = TodoRepository::new(storage, "todos-javascript");
//! let items = repository.load()?;
//! ```

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;
use todomvc_core::{Storage, StorageError};

/// Blob storage that keeps one `<key>.json` file per key in a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `root`; the directory is created lazily
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the file that holds `key`
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] if the key is empty or could
    /// escape the data directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| StorageError::Io(e.to_string()))?;
            tracing::debug!(root = %self.root.display(), "Created data directory");
        }
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    let rejected = key.is_empty()
        || key.contains("..")
        || key.contains('/')
        || key.contains('\\')
        || key.contains('\0');
    if rejected {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!("{}: {e}", path.display()))),
        }
    }

    fn write(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        self.ensure_dir()?;

        let io_error = |e: std::io::Error| StorageError::Io(format!("{}: {e}", path.display()));
        let mut tmp = NamedTempFile::new_in(&self.root).map_err(io_error)?;
        tmp.write_all(blob.as_bytes()).map_err(io_error)?;
        tmp.persist(&path).map_err(|e| io_error(e.error))?;

        tracing::trace!(path = %path.display(), bytes = blob.len(), "Wrote blob");
        Ok(())
    }
}
