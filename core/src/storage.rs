//! Storage trait and the item-list repository built on it.
//!
//! The persisted state is one named blob per namespace: the whole item list
//! serialized as a JSON array, overwritten after every mutation. There is no
//! incremental diffing and no schema versioning.
//!
//! # Implementations
//!
//! - `FileStorage` (in `todomvc-storage` crate): one JSON file per key
//! - `InMemoryStorage` (in `todomvc-testing` crate): `HashMap`-backed, for tests
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use todomvc_core::TodoRepository;
//!
//! let repository = TodoRepository::new(Arc::new(storage), "todos-javascript");
//! let items = repository.load()?;          // empty when nothing was saved
//! repository.save(&items)?;
//! ```

use crate::item::Item;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while reading or writing persisted blobs.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The key cannot be used by this backend.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Key-value blob storage, the shape of browser local storage.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; they are shared between the Store
/// runtime and the application shell.
pub trait Storage: Send + Sync {
    /// Read the blob stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn write(&self, key: &str, blob: &str) -> Result<(), StorageError>;
}

/// Reads and writes the whole item list under one namespaced key.
#[derive(Clone)]
pub struct TodoRepository {
    storage: Arc<dyn Storage>,
    namespace: String,
}

impl TodoRepository {
    /// Creates a repository over `storage` using `namespace` as the key
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, namespace: impl Into<String>) -> Self {
        Self {
            storage,
            namespace: namespace.into(),
        }
    }

    /// The key the list is stored under
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Load the persisted list.
    ///
    /// An absent blob, an empty blob and a JSON `null` all read as an empty
    /// list.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Serialization`] if the blob is not a valid item
    /// array, or the backend's error if it cannot be read. Callers that want
    /// the safe default fall back to an empty list.
    pub fn load(&self) -> Result<Vec<Item>, StorageError> {
        let Some(blob) = self.storage.read(&self.namespace)? else {
            return Ok(Vec::new());
        };
        if blob.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items: Option<Vec<Item>> = serde_json::from_str(&blob)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(items.unwrap_or_default())
    }

    /// Overwrite the persisted list.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or the backend write fails.
    pub fn save(&self, items: &[Item]) -> Result<(), StorageError> {
        let blob =
            serde_json::to_string(items).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.write(&self.namespace, &blob)
    }
}

impl std::fmt::Debug for TodoRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoRepository")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStorage(Mutex<HashMap<String, String>>);

    impl Storage for MapStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self
                .0
                .lock()
                .map_err(|e| StorageError::Io(e.to_string()))?
                .get(key)
                .cloned())
        }

        fn write(&self, key: &str, blob: &str) -> Result<(), StorageError> {
            self.0
                .lock()
                .map_err(|e| StorageError::Io(e.to_string()))?
                .insert(key.to_string(), blob.to_string());
            Ok(())
        }
    }

    fn repository_with(blob: Option<&str>) -> TodoRepository {
        let storage = MapStorage::default();
        if let Some(blob) = blob {
            let _ = storage.write("todos", blob);
        }
        TodoRepository::new(Arc::new(storage), "todos")
    }

    #[test]
    fn absent_blob_loads_empty() {
        let items = repository_with(None).load();
        assert!(matches!(items, Ok(ref v) if v.is_empty()));
    }

    #[test]
    fn empty_and_null_blobs_load_empty() {
        assert!(matches!(repository_with(Some("")).load(), Ok(ref v) if v.is_empty()));
        assert!(matches!(repository_with(Some("null")).load(), Ok(ref v) if v.is_empty()));
    }

    #[test]
    fn malformed_blob_is_a_serialization_error() {
        let result = repository_with(Some("{not json")).load();
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let repository = repository_with(None);
        let mut done = Item::new(ItemId::new("2"), "Walk dog");
        done.toggle();
        let items = vec![Item::new(ItemId::new("1"), "Buy milk"), done];

        assert!(repository.save(&items).is_ok());
        let loaded = repository.load().ok();
        assert_eq!(loaded, Some(items));
    }

    #[test]
    fn namespaces_are_isolated() {
        let storage: Arc<dyn Storage> = Arc::new(MapStorage::default());
        let javascript = TodoRepository::new(Arc::clone(&storage), "todos-javascript");
        let jquery = TodoRepository::new(storage, "todos-jquery");

        assert!(
            javascript
                .save(&[Item::new(ItemId::new("1"), "Buy milk")])
                .is_ok()
        );
        assert!(matches!(jquery.load(), Ok(ref v) if v.is_empty()));
        assert_eq!(javascript.namespace(), "todos-javascript");
    }
}
