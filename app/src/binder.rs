//! UI event bindings.
//!
//! A [`DomEvent`] is what the host observed: which kind of event, on which
//! element role, for which item row, with the element's value, checked state
//! or key code. The binder walks a static table of [`Binding`] rows and hands
//! the event to the first row matching its kind and role. The handler either
//! produces an action or declines (wrong key, missing item id).
//!
//! | Event | Role | Action |
//! |---|---|---|
//! | key-up (Enter) | new-item input | `Create` |
//! | change | toggle-all | `ToggleAll` |
//! | click | clear-completed | `DestroyCompleted` |
//! | change | item toggle | `Toggle` |
//! | double-click | item label | `BeginEdit` |
//! | key-up (Enter / Escape) | edit field | `EndEdit` |
//! | focus-out | edit field | `Edit` |
//! | click | item destroy | `Destroy` |

use crate::types::TodoAction;
use todomvc_core::ItemId;

/// Key code of Enter
pub const ENTER_KEY: u32 = 13;
/// Key code of Escape
pub const ESCAPE_KEY: u32 = 27;

/// Kind of UI event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A key was released
    KeyUp,
    /// A checkbox changed
    Change,
    /// Single click
    Click,
    /// Double click
    DoubleClick,
    /// An element lost focus
    FocusOut,
}

/// Element role an event targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The "What needs to be done?" input
    NewTodo,
    /// The mark-all-complete checkbox
    ToggleAll,
    /// The footer's clear-completed button
    ClearCompleted,
    /// A row's checkbox
    ItemToggle,
    /// A row's title label
    ItemLabel,
    /// A row's edit field
    ItemEdit,
    /// A row's delete button
    ItemDestroy,
}

/// Keys the bindings distinguish
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Enter (13)
    Enter,
    /// Escape (27)
    Escape,
    /// Anything else
    Other(u32),
}

impl Key {
    /// Classifies a key code
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code {
            ENTER_KEY => Self::Enter,
            ESCAPE_KEY => Self::Escape,
            other => Self::Other(other),
        }
    }
}

/// One observed UI event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomEvent {
    /// What happened
    pub kind: EventKind,
    /// Where it happened
    pub role: Role,
    /// Owning row, for per-item roles
    pub item: Option<ItemId>,
    /// Text value of the target input
    pub value: Option<String>,
    /// Checked state of the target checkbox
    pub checked: Option<bool>,
    /// Released key, for key-up events
    pub key: Option<Key>,
}

impl DomEvent {
    /// An event with no payload
    #[must_use]
    pub const fn new(kind: EventKind, role: Role) -> Self {
        Self {
            kind,
            role,
            item: None,
            value: None,
            checked: None,
            key: None,
        }
    }

    /// Sets the owning row
    #[must_use]
    pub fn on_item(mut self, id: ItemId) -> Self {
        self.item = Some(id);
        self
    }

    /// Sets the target's text value
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the target's checked state
    #[must_use]
    pub const fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Sets the released key from its code
    #[must_use]
    pub const fn with_key_code(mut self, code: u32) -> Self {
        self.key = Some(Key::from_code(code));
        self
    }

    /// Key-up in the new-item input holding `value`
    #[must_use]
    pub fn new_todo_key_up(value: impl Into<String>, code: u32) -> Self {
        Self::new(EventKind::KeyUp, Role::NewTodo)
            .with_value(value)
            .with_key_code(code)
    }

    /// Change of the toggle-all checkbox
    #[must_use]
    pub const fn toggle_all(checked: bool) -> Self {
        Self::new(EventKind::Change, Role::ToggleAll).with_checked(checked)
    }

    /// Click on clear-completed
    #[must_use]
    pub const fn clear_completed() -> Self {
        Self::new(EventKind::Click, Role::ClearCompleted)
    }

    /// Change of a row's checkbox
    #[must_use]
    pub fn toggle(id: ItemId) -> Self {
        Self::new(EventKind::Change, Role::ItemToggle).on_item(id)
    }

    /// Double-click on a row's label
    #[must_use]
    pub fn label_double_click(id: ItemId) -> Self {
        Self::new(EventKind::DoubleClick, Role::ItemLabel).on_item(id)
    }

    /// Key-up in a row's edit field holding `value`
    #[must_use]
    pub fn edit_key_up(id: ItemId, value: impl Into<String>, code: u32) -> Self {
        Self::new(EventKind::KeyUp, Role::ItemEdit)
            .on_item(id)
            .with_value(value)
            .with_key_code(code)
    }

    /// A row's edit field lost focus holding `value`
    #[must_use]
    pub fn edit_focus_out(id: ItemId, value: impl Into<String>) -> Self {
        Self::new(EventKind::FocusOut, Role::ItemEdit)
            .on_item(id)
            .with_value(value)
    }

    /// Click on a row's delete button
    #[must_use]
    pub fn destroy(id: ItemId) -> Self {
        Self::new(EventKind::Click, Role::ItemDestroy).on_item(id)
    }
}

/// Turns a matched event into an action, or declines
pub type Handler = fn(&DomEvent) -> Option<TodoAction>;

/// One row of the binding table
#[derive(Clone, Copy, Debug)]
pub struct Binding {
    /// Event kind to match
    pub kind: EventKind,
    /// Target role to match
    pub role: Role,
    /// What to do on a match
    pub handler: Handler,
}

impl Binding {
    const fn new(kind: EventKind, role: Role, handler: Handler) -> Self {
        Self {
            kind,
            role,
            handler,
        }
    }

    /// Whether this row handles `event`
    #[must_use]
    pub fn matches(&self, event: &DomEvent) -> bool {
        self.kind == event.kind && self.role == event.role
    }
}

/// The task list's event bindings
pub const BINDINGS: &[Binding] = &[
    Binding::new(EventKind::KeyUp, Role::NewTodo, create),
    Binding::new(EventKind::Change, Role::ToggleAll, toggle_all),
    Binding::new(EventKind::Click, Role::ClearCompleted, destroy_completed),
    Binding::new(EventKind::Change, Role::ItemToggle, toggle),
    Binding::new(EventKind::DoubleClick, Role::ItemLabel, begin_edit),
    Binding::new(EventKind::KeyUp, Role::ItemEdit, edit_key_up),
    Binding::new(EventKind::FocusOut, Role::ItemEdit, commit_edit),
    Binding::new(EventKind::Click, Role::ItemDestroy, destroy),
];

fn create(event: &DomEvent) -> Option<TodoAction> {
    (event.key == Some(Key::Enter)).then(|| TodoAction::Create {
        title: event.value.clone().unwrap_or_default(),
    })
}

fn toggle_all(event: &DomEvent) -> Option<TodoAction> {
    Some(TodoAction::ToggleAll {
        completed: event.checked.unwrap_or(false),
    })
}

const fn destroy_completed(_event: &DomEvent) -> Option<TodoAction> {
    Some(TodoAction::DestroyCompleted)
}

fn toggle(event: &DomEvent) -> Option<TodoAction> {
    let id = event.item.clone()?;
    Some(TodoAction::Toggle { id })
}

fn begin_edit(event: &DomEvent) -> Option<TodoAction> {
    let id = event.item.clone()?;
    Some(TodoAction::BeginEdit { id })
}

fn edit_key_up(event: &DomEvent) -> Option<TodoAction> {
    let abort = match event.key? {
        Key::Enter => false,
        Key::Escape => true,
        Key::Other(_) => return None,
    };
    let id = event.item.clone()?;
    Some(TodoAction::EndEdit { id, abort })
}

fn commit_edit(event: &DomEvent) -> Option<TodoAction> {
    let id = event.item.clone()?;
    Some(TodoAction::Edit {
        id,
        title: event.value.clone().unwrap_or_default(),
    })
}

fn destroy(event: &DomEvent) -> Option<TodoAction> {
    let id = event.item.clone()?;
    Some(TodoAction::Destroy { id })
}

/// Dispatches events through a binding table
#[derive(Clone, Copy, Debug)]
pub struct EventBinder {
    bindings: &'static [Binding],
}

impl EventBinder {
    /// Binder over the task list's [`BINDINGS`]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_bindings(BINDINGS)
    }

    /// Binder over a custom table
    #[must_use]
    pub const fn with_bindings(bindings: &'static [Binding]) -> Self {
        Self { bindings }
    }

    /// The action for `event`, if any binding produces one
    #[must_use]
    pub fn bind(&self, event: &DomEvent) -> Option<TodoAction> {
        let Some(binding) = self.bindings.iter().find(|b| b.matches(event)) else {
            tracing::trace!(kind = ?event.kind, role = ?event.role, "No binding for event");
            return None;
        };
        let action = (binding.handler)(event);
        if action.is_none() {
            tracing::trace!(kind = ?event.kind, role = ?event.role, "Binding declined event");
        }
        action
    }
}

impl Default for EventBinder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> ItemId {
        ItemId::new("a")
    }

    #[test]
    fn key_codes_classify() {
        assert_eq!(Key::from_code(13), Key::Enter);
        assert_eq!(Key::from_code(27), Key::Escape);
        assert_eq!(Key::from_code(65), Key::Other(65));
    }

    #[test]
    fn new_todo_only_creates_on_enter() {
        let binder = EventBinder::new();
        assert_eq!(
            binder.bind(&DomEvent::new_todo_key_up("Buy milk", ENTER_KEY)),
            Some(TodoAction::Create {
                title: "Buy milk".to_string()
            })
        );
        assert_eq!(binder.bind(&DomEvent::new_todo_key_up("Buy milk", 77)), None);
        assert_eq!(binder.bind(&DomEvent::new_todo_key_up("Buy milk", ESCAPE_KEY)), None);
    }

    #[test]
    fn toggle_all_carries_checked_state() {
        let binder = EventBinder::new();
        assert_eq!(
            binder.bind(&DomEvent::toggle_all(true)),
            Some(TodoAction::ToggleAll { completed: true })
        );
    }

    #[test]
    fn item_events_map_to_item_actions() {
        let binder = EventBinder::new();
        assert_eq!(
            binder.bind(&DomEvent::toggle(id())),
            Some(TodoAction::Toggle { id: id() })
        );
        assert_eq!(
            binder.bind(&DomEvent::label_double_click(id())),
            Some(TodoAction::BeginEdit { id: id() })
        );
        assert_eq!(
            binder.bind(&DomEvent::destroy(id())),
            Some(TodoAction::Destroy { id: id() })
        );
        assert_eq!(
            binder.bind(&DomEvent::clear_completed()),
            Some(TodoAction::DestroyCompleted)
        );
    }

    #[test]
    fn edit_field_keys() {
        let binder = EventBinder::new();
        assert_eq!(
            binder.bind(&DomEvent::edit_key_up(id(), "x", ENTER_KEY)),
            Some(TodoAction::EndEdit {
                id: id(),
                abort: false
            })
        );
        assert_eq!(
            binder.bind(&DomEvent::edit_key_up(id(), "x", ESCAPE_KEY)),
            Some(TodoAction::EndEdit {
                id: id(),
                abort: true
            })
        );
        assert_eq!(binder.bind(&DomEvent::edit_key_up(id(), "x", 88)), None);
    }

    #[test]
    fn focus_out_commits_field_value() {
        let binder = EventBinder::new();
        assert_eq!(
            binder.bind(&DomEvent::edit_focus_out(id(), "  Buy oat milk ")),
            Some(TodoAction::Edit {
                id: id(),
                title: "  Buy oat milk ".to_string()
            })
        );
    }

    #[test]
    fn item_events_without_row_are_declined() {
        let binder = EventBinder::new();
        let orphan = DomEvent::new(EventKind::Click, Role::ItemDestroy);
        assert_eq!(binder.bind(&orphan), None);
    }

    #[test]
    fn unbound_events_are_ignored() {
        let binder = EventBinder::new();
        let event = DomEvent::new(EventKind::DoubleClick, Role::NewTodo);
        assert_eq!(binder.bind(&event), None);
    }

    #[test]
    fn custom_table_is_used() {
        const ONLY_CLEAR: &[Binding] = &[Binding::new(
            EventKind::Click,
            Role::ClearCompleted,
            destroy_completed,
        )];
        let binder = EventBinder::with_bindings(ONLY_CLEAR);
        assert!(binder.bind(&DomEvent::toggle_all(true)).is_none());
        assert!(binder.bind(&DomEvent::clear_completed()).is_some());
    }
}
