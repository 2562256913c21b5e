//! Keyword Search
//!
//! Submission policy for the search box.

use tracing::debug;

use crate::api::ItemApi;
use crate::coordinator::{SearchOutcome, StateHandle, ViewCoordinator};
use crate::notify::Notifier;
use crate::view_state::RequestLane;

pub const SEARCH_FAILED: &str = "Failed to search for items";

/// Run a search for `keyword` and hand the outcome to the coordinator.
///
/// A blank keyword clears the filter without a request. Otherwise the
/// keyword is sent as typed and the returned items are emitted verbatim.
pub async fn submit<S, A, N>(coordinator: &ViewCoordinator<S, A, N>, keyword: &str)
where
    S: StateHandle,
    A: ItemApi,
    N: Notifier,
{
    let Some(token) = coordinator.begin(RequestLane::Filter) else {
        return;
    };

    if keyword.trim().is_empty() {
        debug!("empty keyword, clearing filter");
        coordinator.on_search_completed(token, SearchOutcome::Cleared);
        return;
    }

    match coordinator.api().search_items(keyword).await {
        Ok(data) => coordinator.on_search_completed(token, SearchOutcome::Matches(data.items)),
        Err(e) => coordinator.fail("Search error", SEARCH_FAILED, &e),
    }
}
