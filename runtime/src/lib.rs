//! # Composable TodoMVC Runtime
//!
//! Runtime implementation for the Composable TodoMVC architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: Owns the state, runs the reducer, executes the returned effects
//! - **Effect execution**: `Persist` goes to the environment's repository,
//!   view effects go to the attached [`View`](todomvc_core::View)
//!
//! ## Example
//!
//! ```ignore
//! use todomvc_runtime::Store;
//!
//! let store = Store::new(initial_state, TodoReducer::new(), environment)
//!     .with_view(view);
//!
//! // Send an action
//! store.send(TodoAction::Create { title: "Buy milk".into() }).await?;
//!
//! // Read state
//! let count = store.state(|s| s.count()).await;
//! ```

use std::sync::Arc;
use todomvc_core::{Effect, Environment, Reducer, View};
use tokio::sync::RwLock;

pub use error::StoreError;
pub use store::Store;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;
    use todomvc_core::StorageError;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Writing the item list failed
        ///
        /// The state change and the remaining effects (including the
        /// re-render) have still been applied; only the write is missing.
        #[error("Persisting the item list failed: {0}")]
        Persist(#[from] StorageError),
    }
}

/// Store runtime for coordinating reducer execution and effect handling.
pub mod store {
    use super::{Arc, Effect, Environment, Reducer, RwLock, StoreError, View};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, single writer)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (storage writes and view updates)
    ///
    /// Each `send` holds the write lock for the reducer call and keeps a read
    /// lock while its effects run, so a render always reflects the mutation
    /// that requested it and renders happen in send order.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        view: Option<Arc<dyn View<S>>>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync,
        A: Send + std::fmt::Debug,
        S: Send + Sync,
        E: Environment,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// The store has no view attached; view effects are dropped until one
        /// is set with [`Store::with_view`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                view: None,
            }
        }

        /// Attach the view that receives render, focus and blur effects
        #[must_use]
        pub fn with_view(mut self, view: Arc<dyn View<S>>) -> Self {
            self.view = Some(view);
            self
        }

        /// Send an action to the store
        ///
        /// Runs the reducer, then executes every returned effect in order.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Persist`] if a storage write failed. All other
        /// effects have still been executed.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            tracing::debug!(?action, "Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            let effects = {
                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(&mut state, action, &self.environment);
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                effects
            };

            let state = state.downgrade();
            let mut first_error = None;
            for effect in effects {
                if let Err(error) = self.execute_effect(effect, &state) {
                    first_error.get_or_insert(error);
                }
            }
            tracing::debug!("Action processing completed");

            first_error.map_or(Ok(()), Err)
        }

        /// Render the current state without sending an action
        ///
        /// Used for the first paint after start-up.
        pub async fn render(&self) {
            let state = self.state.read().await;
            if let Err(error) = self.execute_effect(Effect::Render, &state) {
                tracing::warn!(%error, "Initial render failed");
            }
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let active = store.state(|s| s.active_items().len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        #[tracing::instrument(skip(self, effect, state), fields(effect = effect.kind()), name = "execute_effect")]
        fn execute_effect(&self, effect: Effect, state: &S) -> Result<(), StoreError> {
            metrics::counter!("store.effects.executed", "type" => effect.kind()).increment(1);

            match effect {
                Effect::Persist(items) => {
                    let repository = self.environment.repository();
                    if let Err(error) = repository.save(&items) {
                        tracing::error!(
                            namespace = repository.namespace(),
                            %error,
                            "Failed to persist item list"
                        );
                        metrics::counter!("store.persist.failures").increment(1);
                        return Err(StoreError::Persist(error));
                    }
                    tracing::trace!(count = items.len(), "Persisted item list");
                },
                Effect::Render => {
                    if let Some(view) = &self.view {
                        view.render(state);
                    }
                },
                Effect::Focus(target) => {
                    if let Some(view) = &self.view {
                        view.focus(&target);
                    }
                },
                Effect::Blur(id) => {
                    if let Some(view) = &self.view {
                        view.blur(&id);
                    }
                },
                Effect::ClearNewTodo => {
                    if let Some(view) = &self.view {
                        view.clear_new_todo();
                    }
                },
            }

            Ok(())
        }
    }
}
