//! Headless document that receives view effects.
//!
//! [`HtmlView`] stands in for the browser page: it keeps the latest rendered
//! [`Frame`], which element has focus, the text sitting in the new-item
//! input and in each row's edit field. A blur request is recorded and later
//! handed back as a focus-out event carrying the field's value, which is
//! what a browser would fire.

use crate::binder::{DomEvent, EventKind, Role};
use crate::render::{Frame, Renderer};
use crate::types::TodoState;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use todomvc_core::{FocusTarget, ItemId, View};

/// Snapshot of the page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// Latest render
    pub frame: Frame,
    /// Element holding keyboard focus
    pub focus: Option<FocusTarget>,
    /// Text in the new-item input
    pub new_todo_value: String,
    /// Text in each rendered row's edit field
    pub edit_values: HashMap<ItemId, String>,
    /// Number of renders so far
    pub renders: usize,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toggle_all = if self.frame.toggle_all_checked { "[x]" } else { "[ ]" };
        writeln!(f, "<input id=\"new-todo\" value=\"{}\">", self.new_todo_value)?;
        if self.frame.main_visible {
            writeln!(f, "<section id=\"main\"> {toggle_all} toggle-all")?;
            write!(f, "{}", self.frame.list)?;
            writeln!(f, "</section>")?;
        }
        if let Some(footer) = &self.frame.footer {
            writeln!(f, "<footer id=\"footer\">")?;
            writeln!(f, "{footer}")?;
            writeln!(f, "</footer>")?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Page {
    document: Document,
    pending_blurs: Vec<ItemId>,
}

/// [`View`] over a headless [`Document`]
#[derive(Debug)]
pub struct HtmlView {
    renderer: Renderer,
    page: Mutex<Page>,
}

impl HtmlView {
    /// Creates an empty page rendered by `renderer`
    #[must_use]
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            page: Mutex::new(Page::default()),
        }
    }

    fn with_page<T>(&self, f: impl FnOnce(&mut Page) -> T) -> T {
        let mut page = self.page.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut page)
    }

    /// Copy of the current page
    #[must_use]
    pub fn document(&self) -> Document {
        self.with_page(|page| page.document.clone())
    }

    /// Records what the user typed before an event fires
    ///
    /// Key-ups carry the target input's current text; the page keeps it so a
    /// later blur can report it.
    pub fn observe(&self, event: &DomEvent) {
        let Some(value) = &event.value else {
            return;
        };
        self.with_page(|page| match (event.role, &event.item) {
            (Role::NewTodo, _) => value.clone_into(&mut page.document.new_todo_value),
            (Role::ItemEdit, Some(id)) => {
                page.document.edit_values.insert(id.clone(), value.clone());
            },
            _ => {},
        });
    }

    /// Focus-out events for every edit field blurred since the last call
    #[must_use]
    pub fn take_focus_outs(&self) -> Vec<DomEvent> {
        self.with_page(|page| {
            let blurred = std::mem::take(&mut page.pending_blurs);
            blurred
                .into_iter()
                .filter_map(|id| {
                    let Some(value) = page.document.edit_values.get(&id).cloned() else {
                        tracing::debug!(%id, "Blurred edit field is not on the page");
                        return None;
                    };
                    Some(DomEvent::new(EventKind::FocusOut, Role::ItemEdit)
                        .on_item(id)
                        .with_value(value))
                })
                .collect()
        })
    }
}

impl View<TodoState> for HtmlView {
    fn render(&self, state: &TodoState) {
        let frame = match self.renderer.frame(state) {
            Ok(frame) => frame,
            Err(error) => {
                tracing::error!(%error, "Render failed, keeping previous markup");
                return;
            },
        };
        let edit_values = state
            .filtered_items()
            .into_iter()
            .map(|item| (item.id.clone(), item.title.clone()))
            .collect();

        self.with_page(|page| {
            page.document.frame = frame;
            page.document.edit_values = edit_values;
            page.document.renders += 1;
        });
        tracing::trace!(items = state.count(), "Rendered");
    }

    fn focus(&self, target: &FocusTarget) {
        self.with_page(|page| page.document.focus = Some(target.clone()));
    }

    fn blur(&self, id: &ItemId) {
        self.with_page(|page| {
            if page.document.focus == Some(FocusTarget::EditField(id.clone())) {
                page.document.focus = None;
            }
            page.pending_blurs.push(id.clone());
        });
    }

    fn clear_new_todo(&self) {
        self.with_page(|page| page.document.new_todo_value.clear());
    }
}
