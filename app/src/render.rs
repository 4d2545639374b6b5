//! Markup for the item list and footer.
//!
//! Templates live next to this file as standalone `.html` files and are
//! embedded at compile time. The `.html` suffix turns on minijinja's HTML
//! auto-escaping, so titles are always emitted as text.
//!
//! Rendering is a pure function of its inputs; the renderer keeps no state
//! besides the compiled templates.

use crate::types::TodoState;
use minijinja::{context, Environment};
use serde::Serialize;
use thiserror::Error;
use todomvc_core::{Filter, FooterSummary, Item, ItemId};

/// Per-item `<li>` rows
pub const ITEM_LIST_TEMPLATE: &str = include_str!("templates/item_list.html");
/// Count phrase, filter links and clear-completed control
pub const FOOTER_TEMPLATE: &str = include_str!("templates/footer.html");

const ITEM_LIST: &str = "item_list.html";
const FOOTER: &str = "footer.html";

/// Errors produced while compiling or rendering templates
#[derive(Error, Debug)]
pub enum RenderError {
    /// A template failed to compile or render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// `word` for exactly one, `word` + "s" otherwise
#[must_use]
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[derive(Serialize)]
struct ItemRow<'a> {
    id: &'a str,
    title: &'a str,
    completed: bool,
    class: &'static str,
}

impl<'a> ItemRow<'a> {
    fn new(item: &'a Item, editing: bool) -> Self {
        let class = match (item.completed, editing) {
            (true, true) => "completed editing",
            (true, false) => "completed",
            (false, true) => "editing",
            (false, false) => "",
        };
        Self {
            id: item.id.as_str(),
            title: &item.title,
            completed: item.completed,
            class,
        }
    }
}

/// Everything one render pass produces
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// `<li>` rows of the filtered list
    pub list: String,
    /// Main section shown (the filtered list is non-empty)
    pub main_visible: bool,
    /// Toggle-all box checked (no active items)
    pub toggle_all_checked: bool,
    /// Footer markup, `None` when the list is empty and the footer is hidden
    pub footer: Option<String>,
}

/// Compiled templates
///
/// # Example
///
/// ```ignore
/// let renderer = Renderer::new()?;
/// let frame = renderer.frame(&state)?;
/// println!("{}", frame.list);
/// ```
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Compiles the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if a template does not compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_filter("pluralize", |count: usize, word: String| {
            pluralize(count, &word)
        });
        env.add_template(ITEM_LIST, ITEM_LIST_TEMPLATE)?;
        env.add_template(FOOTER, FOOTER_TEMPLATE)?;
        Ok(Self { env })
    }

    /// One `<li>` per item, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if rendering fails.
    pub fn render_list<'a>(
        &self,
        items: impl IntoIterator<Item = &'a Item>,
        editing: Option<&ItemId>,
    ) -> Result<String, RenderError> {
        let rows: Vec<ItemRow<'_>> = items
            .into_iter()
            .map(|item| ItemRow::new(item, editing == Some(&item.id)))
            .collect();
        let template = self.env.get_template(ITEM_LIST)?;
        Ok(template.render(context! { items => rows })?)
    }

    /// Count phrase, filter links with `filter` selected, clear-completed.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if rendering fails.
    pub fn render_footer(
        &self,
        summary: FooterSummary,
        filter: Filter,
    ) -> Result<String, RenderError> {
        let filters: Vec<&str> = Filter::ALL.iter().map(|f| f.as_str()).collect();
        let template = self.env.get_template(FOOTER)?;
        Ok(template.render(context! {
            count => summary.displayed_count(filter),
            filter => filter.as_str(),
            filters => filters,
        })?)
    }

    /// Renders everything visible for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if rendering fails.
    pub fn frame(&self, state: &TodoState) -> Result<Frame, RenderError> {
        let visible = state.filtered_items();
        let main_visible = !visible.is_empty();
        let editing = state.editing.as_ref().map(|session| &session.id);
        let list = self.render_list(visible, editing)?;

        let footer = if state.count() > 0 {
            Some(self.render_footer(state.summary(), state.filter)?)
        } else {
            None
        };

        Ok(Frame {
            list,
            main_visible,
            toggle_all_checked: state.active_items().is_empty(),
            footer,
        })
    }
}
