//! Reducer logic for the task list.
//!
//! Every mutation overwrites the stored list, re-renders and returns focus to
//! the new-item input. Inputs that change nothing (blank titles, unknown ids)
//! produce no effects at all.

use crate::types::{EditSession, TodoAction, TodoState};
use std::sync::Arc;
use todomvc_core::{
    smallvec, Effect, Environment, Filter, FocusTarget, IdGenerator, Item, ItemId, Reducer,
    SmallVec, TodoRepository,
};

/// Environment dependencies for the task list reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Identifier source for new items
    pub ids: Arc<dyn IdGenerator>,
    /// Where the list is persisted
    pub repository: TodoRepository,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>, repository: TodoRepository) -> Self {
        Self { ids, repository }
    }
}

impl Environment for TodoEnvironment {
    fn repository(&self) -> &TodoRepository {
        &self.repository
    }
}

/// Reducer for the task list
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Effects of a mutation: save, redraw, focus the new-item input
    ///
    /// A redraw drops any row out of edit mode.
    fn mutated(state: &mut TodoState) -> SmallVec<[Effect; 4]> {
        state.editing = None;
        smallvec![
            Effect::Persist(state.items.clone()),
            Effect::Render,
            Effect::Focus(FocusTarget::NewTodo)
        ]
    }

    fn unknown(id: &ItemId, action: &'static str) -> SmallVec<[Effect; 4]> {
        tracing::debug!(%id, action, "Ignoring action for unknown item");
        SmallVec::new()
    }

    fn create(state: &mut TodoState, title: &str, env: &TodoEnvironment) -> SmallVec<[Effect; 4]> {
        let title = title.trim();
        if title.is_empty() {
            tracing::debug!("Ignoring create with empty title");
            return SmallVec::new();
        }

        let id = env.ids.next_id();
        tracing::debug!(%id, "Creating item");
        state.items.push(Item::new(id, title));

        let mut effects = Self::mutated(state);
        effects.insert(0, Effect::ClearNewTodo);
        effects
    }

    fn edit(state: &mut TodoState, id: ItemId, title: &str) -> SmallVec<[Effect; 4]> {
        let title = title.trim();
        if title.is_empty() {
            return Self::destroy(state, &id);
        }
        if state.get(&id).is_none() {
            return Self::unknown(&id, "edit");
        }

        let session = state.editing.take_if(|session| session.id == id);
        if session.is_some_and(|session| session.aborted) {
            tracing::debug!(%id, "Edit aborted, keeping title");
            return smallvec![Effect::Render, Effect::Focus(FocusTarget::NewTodo)];
        }

        state.set_title(&id, title);
        Self::mutated(state)
    }

    fn destroy(state: &mut TodoState, id: &ItemId) -> SmallVec<[Effect; 4]> {
        if state.remove(id).is_none() {
            return Self::unknown(id, "destroy");
        }
        Self::mutated(state)
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect; 4]> {
        match action {
            TodoAction::Create { title } => Self::create(state, &title, env),

            TodoAction::Toggle { id } => {
                if !state.toggle(&id) {
                    return Self::unknown(&id, "toggle");
                }
                Self::mutated(state)
            },

            TodoAction::ToggleAll { completed } => {
                state.set_all_completed(completed);
                Self::mutated(state)
            },

            TodoAction::BeginEdit { id } => {
                if state.get(&id).is_none() {
                    return Self::unknown(&id, "begin_edit");
                }
                state.editing = Some(EditSession::new(id.clone()));
                smallvec![Effect::Render, Effect::Focus(FocusTarget::EditField(id))]
            },

            TodoAction::EndEdit { id, abort } => {
                if state.get(&id).is_none() {
                    return Self::unknown(&id, "end_edit");
                }
                if abort {
                    state.editing = Some(EditSession {
                        id: id.clone(),
                        aborted: true,
                    });
                }
                smallvec![Effect::Blur(id)]
            },

            TodoAction::Edit { id, title } => Self::edit(state, id, &title),

            TodoAction::Destroy { id } => Self::destroy(state, &id),

            TodoAction::DestroyCompleted => {
                let removed = state.remove_completed();
                tracing::debug!(removed, "Destroyed completed items");
                state.filter = Filter::All;
                Self::mutated(state)
            },

            TodoAction::SetFilter { filter } => {
                state.filter = filter;
                state.editing = None;
                smallvec![Effect::Render, Effect::Focus(FocusTarget::NewTodo)]
            },
        }
    }
}
