//! Domain types for the task list.
//!
//! The state is the ordered item list, the current filter and the edit
//! session of the row being edited, if any. Queries are pure and keep
//! insertion order; mutation primitives report whether anything changed so
//! the reducer can turn unknown ids into no-ops.

use todomvc_core::{Filter, FooterSummary, Item, ItemId};

/// The row currently in edit mode
///
/// Not persisted. `aborted` is set by Escape and makes the following commit
/// keep the old title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    /// Item being edited
    pub id: ItemId,
    /// Whether the edit was cancelled
    pub aborted: bool,
}

impl EditSession {
    /// Starts a fresh, not yet aborted session
    #[must_use]
    pub const fn new(id: ItemId) -> Self {
        Self { id, aborted: false }
    }
}

/// State of the task list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    /// All items in insertion order
    pub items: Vec<Item>,
    /// Current view filter
    pub filter: Filter,
    /// Row in edit mode
    pub editing: Option<EditSession>,
}

impl TodoState {
    /// Creates an empty state showing all items
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state from a loaded list
    #[must_use]
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Returns the number of items
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Items not yet completed, in order
    #[must_use]
    pub fn active_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| !item.completed).collect()
    }

    /// Completed items, in order
    #[must_use]
    pub fn completed_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.completed).collect()
    }

    /// Items visible under the current filter, in order
    #[must_use]
    pub fn filtered_items(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    /// Footer counts over the whole list
    #[must_use]
    pub fn summary(&self) -> FooterSummary {
        FooterSummary::from_items(&self.items)
    }

    /// Returns an item by id
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.position(id).map(|i| &self.items[i])
    }

    /// Whether `id` is the row in edit mode
    #[must_use]
    pub fn is_editing(&self, id: &ItemId) -> bool {
        self.editing.as_ref().is_some_and(|session| &session.id == id)
    }

    /// Index of an item, scanning from the end of the list
    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().rposition(|item| &item.id == id)
    }

    /// Flips `completed`; false when the id is unknown
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        match self.position(id) {
            Some(i) => {
                self.items[i].toggle();
                true
            },
            None => false,
        }
    }

    /// Sets `completed` on every item
    pub fn set_all_completed(&mut self, completed: bool) {
        for item in &mut self.items {
            item.completed = completed;
        }
    }

    /// Replaces a title; false when the id is unknown
    pub fn set_title(&mut self, id: &ItemId, title: &str) -> bool {
        match self.position(id) {
            Some(i) => {
                title.clone_into(&mut self.items[i].title);
                true
            },
            None => false,
        }
    }

    /// Removes an item, ending its edit session; `None` when the id is unknown
    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let i = self.position(id)?;
        if self.is_editing(id) {
            self.editing = None;
        }
        Some(self.items.remove(i))
    }

    /// Removes every completed item, returning how many went
    pub fn remove_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        before - self.items.len()
    }
}

/// Every input the task list reducer understands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Append an item (ignored when the trimmed title is empty)
    Create {
        /// Raw input text
        title: String,
    },

    /// Flip one item's completed flag
    Toggle {
        /// Item to toggle
        id: ItemId,
    },

    /// Set every item's completed flag
    ToggleAll {
        /// New flag for all items
        completed: bool,
    },

    /// Put a row into edit mode
    BeginEdit {
        /// Item to edit
        id: ItemId,
    },

    /// Leave the edit field (Enter commits, Escape aborts)
    EndEdit {
        /// Item being edited
        id: ItemId,
        /// Whether the edit was cancelled
        abort: bool,
    },

    /// Commit the edit field's value
    Edit {
        /// Item being edited
        id: ItemId,
        /// Raw field text
        title: String,
    },

    /// Remove one item
    Destroy {
        /// Item to remove
        id: ItemId,
    },

    /// Remove every completed item and show all
    DestroyCompleted,

    /// Change the view filter
    SetFilter {
        /// New filter
        filter: Filter,
    },
}
