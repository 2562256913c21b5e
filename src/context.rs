//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::coordinator::ViewCoordinator;
use crate::models::Item;
use crate::notify::BrowserAlert;
use crate::view_state::ViewState;

/// Coordinator wired to the browser
pub type AppCoordinator = ViewCoordinator<RwSignal<ViewState>, ApiClient, BrowserAlert>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Which items are shown and whether the list is stale
    pub view: RwSignal<ViewState>,
    /// Backend and asset origins
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            view: RwSignal::new(ViewState::new()),
            config,
        }
    }

    /// Coordinator over this session's view state
    pub fn coordinator(&self) -> AppCoordinator {
        ViewCoordinator::new(self.view, ApiClient::new(self.config), BrowserAlert)
    }

    /// Items on screen, re-notifying only when they change
    pub fn displayed(&self) -> Memo<Vec<Item>> {
        let view = self.view;
        Memo::new(move |_| view.with(|s| s.displayed().to_vec()))
    }

    /// `Some` while the unfiltered list is stale and visible; a new value
    /// after every listing
    pub fn reload_key(&self) -> Memo<Option<u64>> {
        let view = self.view;
        Memo::new(move |_| view.with(ViewState::reload_key))
    }
}

/// Get the app context, provided by [`crate::app::App`]
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
