//! The view sink that executes rendering effects.

use crate::item::ItemId;

/// Element that receives keyboard focus
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The "What needs to be done?" input
    NewTodo,
    /// The edit field of one item
    EditField(ItemId),
}

/// Receives view effects from the Store runtime.
///
/// `render` is the only way markup changes: it is handed the whole state and
/// replaces everything visible. There is no incremental update path.
pub trait View<S>: Send + Sync {
    /// Replace the visible markup with a render of `state`
    fn render(&self, state: &S);

    /// Move keyboard focus
    fn focus(&self, target: &FocusTarget);

    /// Blur an item's edit field
    fn blur(&self, id: &ItemId);

    /// Clear the new-item input
    fn clear_new_todo(&self);
}
