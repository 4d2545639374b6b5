//! # Composable TodoMVC Testing
//!
//! Testing utilities and helpers for the Composable TodoMVC architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A view that records what the Store asked of it
//! - `ReducerTest`, a Given-When-Then harness for reducers
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use todomvc_testing::{InMemoryStorage, RecordingView, SequentialIdGenerator};
//!
//! #[tokio::test]
//! async fn test_create_flow() {
//!     let storage = Arc::new(InMemoryStorage::new());
//!     let view = Arc::new(RecordingView::new());
//!     let store = Store::new(TodoState::new(), TodoReducer::new(), env(&storage))
//!         .with_view(view.clone());
//!
//!     store.send(TodoAction::Create { title: "Buy milk".into() }).await.unwrap();
//!
//!     assert_eq!(view.render_count(), 1);
//!     assert!(storage.contains_key("todos"));
//! }
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};
use todomvc_core::{FocusTarget, IdGenerator, ItemId, Storage, StorageError, View};


/// Mock implementations of Environment traits
///
/// - `InMemoryStorage`: `HashMap`-backed blob storage
/// - `SequentialIdGenerator`: Predictable ids
/// - `RecordingView`: Captures view effects in order
pub mod mocks {
    use super::{
        AtomicU64, FocusTarget, HashMap, IdGenerator, ItemId, Mutex, Ordering, PoisonError,
        RwLock, Storage, StorageError, View,
    };

    /// In-memory blob storage for fast, deterministic testing.
    ///
    /// # Example
    ///
    /// ```
    /// use todomvc_testing::InMemoryStorage;
    /// use todomvc_core::Storage;
    ///
    /// let storage = InMemoryStorage::new();
    /// storage.write("todos", "[]").unwrap();
    /// assert_eq!(storage.read("todos").unwrap().as_deref(), Some("[]"));
    /// ```
    #[derive(Debug, Default)]
    pub struct InMemoryStorage {
        data: RwLock<HashMap<String, String>>,
        fail_writes: Mutex<bool>,
    }

    impl InMemoryStorage {
        /// Create a new empty storage
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a storage pre-seeded with one blob
        #[must_use]
        pub fn with_blob(key: &str, blob: &str) -> Self {
            let storage = Self::new();
            storage
                .data
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key.to_string(), blob.to_string());
            storage
        }

        /// Make every subsequent write fail with an I/O error
        pub fn fail_writes(&self, fail: bool) {
            *self.fail_writes.lock().unwrap_or_else(PoisonError::into_inner) = fail;
        }

        /// The raw blob stored under `key`
        #[must_use]
        pub fn blob(&self, key: &str) -> Option<String> {
            self.data
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(key)
                .cloned()
        }

        /// Check if a key exists in the storage
        #[must_use]
        pub fn contains_key(&self, key: &str) -> bool {
            self.data
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .contains_key(key)
        }
    }

    impl Storage for InMemoryStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.blob(key))
        }

        fn write(&self, key: &str, blob: &str) -> Result<(), StorageError> {
            if *self.fail_writes.lock().unwrap_or_else(PoisonError::into_inner) {
                return Err(StorageError::Io("storage quota exceeded".to_string()));
            }
            self.data
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key.to_string(), blob.to_string());
            Ok(())
        }
    }

    /// Predictable identifiers: `todo-1`, `todo-2`, ...
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator starting at `todo-1`
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> ItemId {
            let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
            ItemId::new(format!("todo-{n}"))
        }
    }

    /// One call the Store made on a view
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum ViewCall {
        /// `render`
        Render,
        /// `focus`
        Focus(FocusTarget),
        /// `blur`
        Blur(ItemId),
        /// `clear_new_todo`
        ClearNewTodo,
    }

    /// View that records every call in order
    #[derive(Debug, Default)]
    pub struct RecordingView {
        calls: Mutex<Vec<ViewCall>>,
    }

    impl RecordingView {
        /// Create an empty recording
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// All calls so far
        #[must_use]
        pub fn calls(&self) -> Vec<ViewCall> {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Number of renders so far
        #[must_use]
        pub fn render_count(&self) -> usize {
            self.calls()
                .iter()
                .filter(|c| matches!(c, ViewCall::Render))
                .count()
        }

        /// Forget recorded calls
        pub fn clear(&self) {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
        }

        fn record(&self, call: ViewCall) {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(call);
        }
    }

    impl<S> View<S> for RecordingView {
        fn render(&self, _state: &S) {
            self.record(ViewCall::Render);
        }

        fn focus(&self, target: &FocusTarget) {
            self.record(ViewCall::Focus(target.clone()));
        }

        fn blur(&self, id: &ItemId) {
            self.record(ViewCall::Blur(id.clone()));
        }

        fn clear_new_todo(&self) {
            self.record(ViewCall::ClearNewTodo);
        }
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::prelude::*;

    /// Titles as a user might type them, including surrounding whitespace
    pub fn title() -> impl Strategy<Value = String> {
        "[ \t]{0,2}[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}[ \t]{0,2}"
    }

    /// Titles that trim to nothing
    pub fn blank_title() -> impl Strategy<Value = String> {
        "[ \t\n]{0,6}"
    }

    /// A sequence of (title, completed) pairs to seed a list with
    pub fn seed_items(max: usize) -> impl Strategy<Value = Vec<(String, bool)>> {
        prop::collection::vec((title(), any::<bool>()), 0..max)
    }
}

// Re-export commonly used items
pub use mocks::{InMemoryStorage, RecordingView, SequentialIdGenerator, ViewCall};
pub use reducer_test::{assertions, ReducerTest};
