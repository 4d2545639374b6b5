//! Line commands for the terminal front end.
//!
//! Each command is turned into the UI events a user would produce in the
//! browser, so the whole binder, reducer and view path runs for it. Items are
//! addressed by their 1-based position in the visible list.

use crate::app::App;
use crate::binder::{DomEvent, EventKind, Role, ENTER_KEY, ESCAPE_KEY};
use clap::Parser;
use std::num::NonZeroUsize;
use thiserror::Error;
use todomvc_core::ItemId;

/// Errors from running a command
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// No visible item at that position
    #[error("No item {0} in the current view")]
    NoSuchItem(usize),
}

/// One line typed at the prompt. The first word picks the command.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[command(multicall = true)]
pub enum Command {
    /// Create an item
    Add {
        /// Title of the new item
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// Flip item n
    Toggle {
        /// Position in the visible list, starting at 1
        n: NonZeroUsize,
    },

    /// Complete all, or reopen all when all are done
    ToggleAll,

    /// Retitle item n (an empty title deletes it)
    Edit {
        /// Position in the visible list, starting at 1
        n: NonZeroUsize,
        /// New title
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// Start editing item n, type text, then press Escape
    Cancel {
        /// Position in the visible list, starting at 1
        n: NonZeroUsize,
        /// Text typed before Escape
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete item n
    #[command(alias = "rm")]
    Remove {
        /// Position in the visible list, starting at 1
        n: NonZeroUsize,
    },

    /// Delete completed items
    Clear,

    /// Show all, active or completed items
    Go {
        /// Filter name or location such as `#/active`
        location: String,
    },

    /// Print the page
    Show,

    /// Exit
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// Parses one input line; a blank line means [`Command::Show`].
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown commands, missing arguments and
    /// positions that are not positive numbers. `help` also comes back as
    /// an error carrying the rendered help text.
    pub fn from_line(line: &str) -> Result<Self, clap::Error> {
        if line.trim().is_empty() {
            return Ok(Self::Show);
        }
        Self::try_parse_from(line.split_whitespace())
    }
}

/// What the caller should do after a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop reading
    Quit,
}

async fn item_at(app: &App, n: NonZeroUsize) -> Result<ItemId, CommandError> {
    app.visible_ids()
        .await
        .into_iter()
        .nth(n.get() - 1)
        .ok_or(CommandError::NoSuchItem(n.get()))
}

/// Runs `command` against `app` as UI events.
///
/// # Errors
///
/// Returns [`CommandError::NoSuchItem`] if a position is outside the
/// visible list.
pub async fn execute(app: &mut App, command: Command) -> Result<Flow, CommandError> {
    match command {
        Command::Add { title } => {
            app.dispatch(DomEvent::new_todo_key_up(title.join(" "), ENTER_KEY))
                .await;
        },
        Command::Toggle { n } => {
            let id = item_at(app, n).await?;
            app.dispatch(DomEvent::toggle(id)).await;
        },
        Command::ToggleAll => {
            let checked = !app.document().frame.toggle_all_checked;
            app.dispatch(DomEvent::toggle_all(checked)).await;
        },
        Command::Edit { n, title } => {
            let id = item_at(app, n).await?;
            app.dispatch(DomEvent::label_double_click(id.clone())).await;
            app.dispatch(DomEvent::edit_key_up(id, title.join(" "), ENTER_KEY))
                .await;
        },
        Command::Cancel { n, text } => {
            let id = item_at(app, n).await?;
            app.dispatch(DomEvent::label_double_click(id.clone())).await;
            let mut escape = DomEvent::new(EventKind::KeyUp, Role::ItemEdit)
                .on_item(id)
                .with_key_code(ESCAPE_KEY);
            escape.value = (!text.is_empty()).then(|| text.join(" "));
            app.dispatch(escape).await;
        },
        Command::Remove { n } => {
            let id = item_at(app, n).await?;
            app.dispatch(DomEvent::destroy(id)).await;
        },
        Command::Clear => app.dispatch(DomEvent::clear_completed()).await,
        Command::Go { location } => app.navigate(&location).await,
        Command::Show => {},
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
