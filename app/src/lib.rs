//! TodoMVC task list on the Composable TodoMVC store runtime.
//!
//! Users create, toggle, edit, filter and delete short text items; the list
//! is saved as one JSON blob after every change. The pieces:
//!
//! - [`types`]: state, queries and actions
//! - [`reducer`]: action handling and the effects it asks for
//! - [`render`]: list and footer markup from minijinja templates
//! - [`binder`]: UI events to actions through a static binding table
//! - [`router`]: `#/:filter` locations to actions
//! - [`view`]: headless page that receives render, focus and blur effects
//! - [`app`]: wiring of all of the above around a `Store`
//! - [`config`], [`shell`]: environment configuration and the line front end
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use todomvc::{App, Config, DomEvent, ENTER_KEY};
//! use todomvc_core::UuidGenerator;
//! use todomvc_storage::FileStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env();
//! let storage = Arc::new(FileStorage::new(&config.data_dir));
//! let app = App::start(&config, storage, Arc::new(UuidGenerator), None).await?;
//!
//! app.dispatch(DomEvent::new_todo_key_up("Buy milk", ENTER_KEY)).await;
//! println!("{}", app.document());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod binder;
pub mod config;
pub mod reducer;
pub mod render;
pub mod router;
pub mod shell;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use app::{App, AppError, TodoStore};
pub use binder::{DomEvent, EventBinder, EventKind, Key, Role, BINDINGS, ENTER_KEY, ESCAPE_KEY};
pub use config::Config;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use render::{pluralize, Frame, RenderError, Renderer};
pub use router::{RouteParams, Router};
pub use shell::{Command, CommandError, Flow};
pub use types::{EditSession, TodoAction, TodoState};
pub use view::{Document, HtmlView};
