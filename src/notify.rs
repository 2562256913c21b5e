//! User Notifications
//!
//! Blocking alerts for failed user actions.

use tracing::error;

/// Surfaces a failure to the user
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert`, blocks until dismissed
#[derive(Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                error!(error = ?e, "failed to show alert");
            }
        }
    }
}
