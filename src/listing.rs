//! Listing Creation
//!
//! Validates and submits a new listing, then marks the item list stale.

use tracing::info;

use crate::api::ItemApi;
use crate::coordinator::{StateHandle, ViewCoordinator};
use crate::error::ApiError;
use crate::models::NewListing;
use crate::notify::Notifier;

pub const LISTING_FAILED: &str = "Failed to list this item";
pub const FIELDS_REQUIRED: &str = "Name and category are required";

impl NewListing {
    /// Name and category must be non-blank
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() || self.category.trim().is_empty() {
            return Err(ApiError::Invalid(FIELDS_REQUIRED));
        }
        Ok(())
    }
}

/// Create `listing`. Returns `true` when the form should be reset.
pub async fn submit<S, A, N>(coordinator: &ViewCoordinator<S, A, N>, listing: &NewListing) -> bool
where
    S: StateHandle,
    A: ItemApi,
    N: Notifier,
{
    if let Err(e) = listing.validate() {
        coordinator.alert(&e.to_string());
        return false;
    }

    match coordinator.api().add_item(listing).await {
        Ok(()) => {
            info!(name = %listing.name, "listing created");
            coordinator.on_listing_completed();
            true
        }
        Err(e) => {
            coordinator.fail("POST error", LISTING_FAILED, &e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::coordinator::testing::*;
    use crate::models::ImageUpload;
    use crate::view_state::ViewState;

    fn listing(name: &str, category: &str) -> NewListing {
        NewListing {
            name: name.to_string(),
            category: category.to_string(),
            image: None,
        }
    }

    #[test]
    fn test_validate_requires_name_and_category() {
        assert!(listing("jacket", "fashion").validate().is_ok());
        assert!(matches!(listing(" ", "fashion").validate(), Err(ApiError::Invalid(_))));
        assert!(matches!(listing("jacket", "").validate(), Err(ApiError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_listing_posts_and_requests_reload() {
        let state = Rc::new(RefCell::new(ViewState::new()));
        let api = FakeApi::replying(vec![Some(vec![]), Some(vec![])]);
        let coordinator = ViewCoordinator::new(state.clone(), api.clone(), RecordingNotifier::default());
        coordinator.load_unfiltered().await;
        assert!(!state.borrow().needs_reload());

        let new = NewListing {
            image: Some(ImageUpload {
                file_name: "cup.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                bytes: vec![0xff, 0xd8],
            }),
            ..listing("cup", "kitchen")
        };
        assert!(submit(&coordinator, &new).await);

        assert_eq!(api.calls(), vec![Call::Fetch, Call::Add(new)]);
        assert!(state.borrow().needs_reload());
    }

    #[tokio::test]
    async fn test_invalid_listing_is_not_sent() {
        let state = Rc::new(RefCell::new(ViewState::new()));
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();
        let coordinator = ViewCoordinator::new(state, api.clone(), notifier.clone());

        assert!(!submit(&coordinator, &listing("", "kitchen")).await);

        assert!(api.calls().is_empty());
        assert_eq!(notifier.alerts(), vec![FIELDS_REQUIRED.to_string()]);
    }

    #[tokio::test]
    async fn test_failed_listing_leaves_state_and_alerts() {
        let state = Rc::new(RefCell::new(ViewState::new()));
        let api = FakeApi::replying(vec![Some(vec![]), None]);
        let notifier = RecordingNotifier::default();
        let coordinator = ViewCoordinator::new(state.clone(), api, notifier.clone());
        coordinator.load_unfiltered().await;

        assert!(!submit(&coordinator, &listing("cup", "kitchen")).await);

        assert!(!state.borrow().needs_reload());
        assert_eq!(notifier.alerts(), vec![LISTING_FAILED.to_string()]);
    }
}
