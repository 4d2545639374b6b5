//! # Composable TodoMVC Core
//!
//! Core traits and domain types for the Composable TodoMVC architecture.
//!
//! A task list is application state (an ordered list of items plus the current
//! view filter), a pure reducer that mutates it, and a small set of effect
//! descriptions that the runtime turns into storage writes and re-renders.
//!
//! ## Core Concepts
//!
//! - **State**: the ordered item list and current [`Filter`]
//! - **Action**: every input the reducer understands (create, toggle, edit, ...)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (persist, render, focus, blur)
//! - **Environment**: Injected dependencies (identifier generation, storage)
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow: event → action → reducer → effects → render
//! - Explicit Effects (no hidden I/O in reducers)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use todomvc_core::{Effect, Reducer, SmallVec, smallvec};
//!
//! impl Reducer for TodoReducer {
//!     type State = TodoState;
//!     type Action = TodoAction;
//!     type Environment = TodoEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut TodoState,
//!         action: TodoAction,
//!         env: &TodoEnvironment,
//!     ) -> SmallVec<[Effect; 4]> {
//!         // Business logic goes here
//!         smallvec![Effect::Render]
//!     }
//! }
//! ```

pub mod filter;
pub mod item;
pub mod storage;
pub mod view;

// Re-export commonly used types
pub use filter::{Filter, UnknownFilter};
pub use item::{FooterSummary, Item, ItemId};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};
pub use storage::{Storage, StorageError, TodoRepository};
pub use view::{FocusTarget, View};

pub use effect::Effect;
pub use environment::{Environment, IdGenerator, UuidGenerator};
pub use reducer::Reducer;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed, in order
        ///
        /// An empty result means the action was a no-op.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution): the Store executes them in the order
/// the reducer returned them.
pub mod effect {
    use crate::item::{Item, ItemId};
    use crate::view::FocusTarget;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect {
        /// Overwrite the persisted list with this snapshot
        Persist(Vec<Item>),

        /// Re-render the whole view from current state
        Render,

        /// Move keyboard focus
        Focus(FocusTarget),

        /// Blur the edit field of an item (commits the edit)
        Blur(ItemId),

        /// Clear the new-item input
        ClearNewTodo,
    }

    impl Effect {
        /// Short label used for logging and metrics
        #[must_use]
        pub const fn kind(&self) -> &'static str {
            match self {
                Self::Persist(_) => "persist",
                Self::Render => "render",
                Self::Focus(_) => "focus",
                Self::Blur(_) => "blur",
                Self::ClearNewTodo => "clear_new_todo",
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use crate::item::ItemId;
    use crate::storage::TodoRepository;
    use uuid::Uuid;

    /// Produces identifiers for newly created items
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - random version-4 UUIDs
    /// let ids = UuidGenerator;
    ///
    /// // Test - predictable ids
    /// let ids = SequentialIdGenerator::new();
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Generate a fresh identifier
        fn next_id(&self) -> ItemId;
    }

    /// Random version-4 UUID identifiers, rendered as lowercase hyphenated strings
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn next_id(&self) -> ItemId {
            ItemId::new(Uuid::new_v4().to_string())
        }
    }

    /// What the Store runtime needs from an environment to execute effects
    pub trait Environment: Send + Sync {
        /// The repository `Effect::Persist` writes through
        fn repository(&self) -> &TodoRepository;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_generator_produces_v4_strings() {
        let id = UuidGenerator.next_id();
        let parsed = uuid::Uuid::parse_str(id.as_str());
        assert!(parsed.is_ok());
        assert_eq!(parsed.map(|u| u.get_version_num()).ok(), Some(4));
    }

    #[test]
    fn uuid_generator_does_not_repeat() {
        let a = UuidGenerator.next_id();
        let b = UuidGenerator.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn effect_kinds_label_metrics() {
        assert_eq!(Effect::Persist(Vec::new()).kind(), "persist");
        assert_eq!(Effect::Focus(FocusTarget::NewTodo).kind(), "focus");
        assert_eq!(Effect::Blur(ItemId::new("a")).kind(), "blur");
        assert_eq!(Effect::ClearNewTodo.kind(), "clear_new_todo");
    }
}
