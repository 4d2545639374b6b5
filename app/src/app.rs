//! Application wiring.
//!
//! [`App`] owns the Store, the headless view, the event binder and the
//! router. UI events go through the binder, locations through the router;
//! both end up as actions sent to the Store, whose effects update storage
//! and the page.

use crate::binder::{DomEvent, EventBinder};
use crate::config::Config;
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::render::{RenderError, Renderer};
use crate::router::Router;
use crate::types::{TodoAction, TodoState};
use crate::view::{Document, HtmlView};
use std::collections::VecDeque;
use std::sync::Arc;
use thiserror::Error;
use todomvc_core::{Filter, IdGenerator, ItemId, Storage, TodoRepository};
use todomvc_runtime::Store;

/// The Store type the application runs
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Errors that can occur while starting the application
#[derive(Error, Debug)]
pub enum AppError {
    /// The templates could not be compiled
    #[error("Renderer setup failed: {0}")]
    Render(#[from] RenderError),
}

/// A running task list
pub struct App {
    store: TodoStore,
    view: Arc<HtmlView>,
    binder: EventBinder,
    router: Router<TodoAction>,
}

impl App {
    /// Loads the list, wires the Store and view, and performs the first render.
    ///
    /// An absent or unreadable stored list starts the app empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] if the templates do not compile.
    #[tracing::instrument(skip_all, fields(namespace = %config.namespace))]
    pub async fn start(
        config: &Config,
        storage: Arc<dyn Storage>,
        ids: Arc<dyn IdGenerator>,
        location: Option<&str>,
    ) -> Result<Self, AppError> {
        let repository = TodoRepository::new(storage, config.namespace.clone());
        let items = repository.load().unwrap_or_else(|error| {
            tracing::warn!(%error, "Stored list unreadable, starting empty");
            Vec::new()
        });
        tracing::info!(count = items.len(), "Loaded items");

        let view = Arc::new(HtmlView::new(Renderer::new()?));
        let store = Store::new(
            TodoState::with_items(items),
            TodoReducer::new(),
            TodoEnvironment::new(ids, repository),
        )
        .with_view(view.clone());

        let router = Router::new(&config.default_route).route("/:filter", |params| {
            TodoAction::SetFilter {
                filter: Filter::from_segment(params.get("filter").unwrap_or_default()),
            }
        });

        let mut app = Self {
            store,
            view,
            binder: EventBinder::new(),
            router,
        };

        match app.router.init(location) {
            Some(action) => app.send(action).await,
            None => app.store.render().await,
        }
        Ok(app)
    }

    /// Handles one UI event, including the focus-out a blur causes
    pub async fn dispatch(&self, event: DomEvent) {
        self.view.observe(&event);

        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            let Some(action) = self.binder.bind(&event) else {
                continue;
            };
            self.send(action).await;
            queue.extend(self.view.take_focus_outs());
        }
    }

    /// Follows a location change such as `#/active`
    pub async fn navigate(&mut self, location: &str) {
        if let Some(action) = self.router.navigate(location) {
            self.send(action).await;
        }
    }

    /// Sends an action straight to the Store
    ///
    /// A failed storage write has already been logged by the runtime; the
    /// state change and render stand.
    pub async fn send(&self, action: TodoAction) {
        if let Err(error) = self.store.send(action).await {
            tracing::warn!(%error, "Continuing without saving");
        }
    }

    /// Copy of the rendered page
    #[must_use]
    pub fn document(&self) -> Document {
        self.view.document()
    }

    /// Current location
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.router.current()
    }

    /// Read state via a closure
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TodoState) -> T,
    {
        self.store.state(f).await
    }

    /// Ids of the items the list currently shows, in order
    pub async fn visible_ids(&self) -> Vec<ItemId> {
        self.state(|s| s.filtered_items().into_iter().map(|item| item.id.clone()).collect())
            .await
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("router", &self.router)
            .finish_non_exhaustive()
    }
}
