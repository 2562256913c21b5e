//! View Coordinator
//!
//! Reacts to search, category and listing events and to the reload effect,
//! translating each into API calls and [`ViewAction`]s.
//!
//! A failed call is logged, alerted once, and leaves the state untouched.

use leptos::prelude::*;
use tracing::{debug, error};

use crate::api::ItemApi;
use crate::error::ApiError;
use crate::models::ItemPage;
use crate::notify::Notifier;
use crate::view_state::{Reduced, RequestLane, RequestToken, ViewAction, ViewState};

/// Shared access to the session's [`ViewState`].
///
/// Returns `None` once the owner is gone (e.g. a disposed signal).
pub trait StateHandle {
    fn with_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R>;
    fn update_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R>;
}

impl StateHandle for RwSignal<ViewState> {
    fn with_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        self.try_with(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Result of a keyword submission
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Empty keyword: show the unfiltered list
    Cleared,
    /// Items returned for the keyword, possibly none
    Matches(ItemPage),
}

pub struct ViewCoordinator<S, A, N> {
    state: S,
    api: A,
    notifier: N,
}

impl<S, A, N> ViewCoordinator<S, A, N>
where
    S: StateHandle,
    A: ItemApi,
    N: Notifier,
{
    pub fn new(state: S, api: A, notifier: N) -> Self {
        Self { state, api, notifier }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Items currently on screen
    #[cfg(test)]
    pub fn displayed(&self) -> ItemPage {
        self.state
            .with_state(|s| s.displayed().to_vec())
            .unwrap_or_default()
    }

    /// Take a token for a request about to start on `lane`
    pub fn begin(&self, lane: RequestLane) -> Option<RequestToken> {
        self.state.update_state(|s| s.issue(lane))
    }

    /// Fetch the unfiltered list if it is stale and no filter hides it
    pub async fn load_unfiltered(&self) {
        let should_fetch = self
            .state
            .with_state(ViewState::should_fetch_unfiltered)
            .unwrap_or(false);
        if !should_fetch {
            return;
        }
        let Some(token) = self.begin(RequestLane::Unfiltered) else {
            return;
        };

        match self.api.fetch_items().await {
            Ok(data) => {
                debug!(count = data.items.len(), "unfiltered items loaded");
                self.dispatch(ViewAction::UnfilteredLoaded { token, page: data.items });
            }
            Err(e) => self.fail("GET error", "Failed to load items", &e),
        }
    }

    /// Apply a finished search. The caller already performed the request.
    pub fn on_search_completed(&self, token: RequestToken, outcome: SearchOutcome) {
        let action = match outcome {
            SearchOutcome::Cleared => ViewAction::FilterCleared { token },
            SearchOutcome::Matches(page) => ViewAction::FilterResolved { token, page },
        };
        self.dispatch(action);
    }

    /// Search by `category` and show the result as the filtered view
    pub async fn on_category_clicked(&self, category: &str) {
        let Some(token) = self.begin(RequestLane::Filter) else {
            return;
        };

        match self.api.search_items(category).await {
            Ok(data) => self.on_search_completed(token, SearchOutcome::Matches(data.items)),
            Err(e) => self.fail(
                "Search error",
                "Failed to search for items by category",
                &e,
            ),
        }
    }

    /// Mark the unfiltered list stale. An active filter stays on screen.
    pub fn on_listing_completed(&self) {
        self.dispatch(ViewAction::ListingCompleted);
    }

    /// Log `err` and alert the user once
    pub fn fail(&self, context: &str, message: &str, err: &ApiError) {
        error!(error = %err, "{}", context);
        self.notifier.alert(message);
    }

    /// Alert without an underlying API error
    pub fn alert(&self, message: &str) {
        self.notifier.alert(message);
    }

    fn dispatch(&self, action: ViewAction) {
        if let Some(Reduced::Stale) = self.state.update_state(|s| s.reduce(action)) {
            debug!("discarded stale response");
        }
    }
}
