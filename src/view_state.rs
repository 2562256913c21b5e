//! View State
//!
//! Decides which item set is on screen and when the unfiltered list is
//! refetched. All mutation goes through [`ViewState::reduce`].
//!
//! Every async call takes a [`RequestToken`] before it starts. A resolution
//! is applied only if its token is still the latest one issued on its lane,
//! so a slow response can never overwrite a newer one.

use crate::models::{Item, ItemPage};

/// Independent request sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestLane {
    /// Searches, category clicks and filter clears
    Filter,
    /// Plain `GET /items`
    Unfiltered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    lane: RequestLane,
    seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    /// A search or category click returned `page` (possibly empty)
    FilterResolved { token: RequestToken, page: ItemPage },
    /// Drop the filter and go back to the unfiltered list
    FilterCleared { token: RequestToken },
    /// The unfiltered fetch returned `page`
    UnfilteredLoaded { token: RequestToken, page: ItemPage },
    /// A new listing was created
    ListingCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduced {
    Applied,
    /// Superseded by a later request on the same lane, ignored
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// `None` = no filter applied; `Some(vec![])` = filter with no matches
    filtered: Option<ItemPage>,
    unfiltered: ItemPage,
    needs_reload: bool,
    /// Bumped by every listing so each one can start a fetch
    reload_generation: u64,
    next_seq: u64,
    latest_filter: Option<u64>,
    latest_unfiltered: Option<u64>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Session start: no filter, unfiltered list pending
    pub fn new() -> Self {
        Self {
            filtered: None,
            unfiltered: Vec::new(),
            needs_reload: true,
            reload_generation: 0,
            next_seq: 0,
            latest_filter: None,
            latest_unfiltered: None,
        }
    }

    #[cfg(test)]
    pub fn filtered(&self) -> Option<&ItemPage> {
        self.filtered.as_ref()
    }

    #[cfg(test)]
    pub fn needs_reload(&self) -> bool {
        self.needs_reload
    }

    /// Filtered results take precedence over the unfiltered list
    pub fn displayed(&self) -> &[Item] {
        self.filtered.as_deref().unwrap_or(&self.unfiltered)
    }

    /// An active filter suppresses unfiltered fetching
    pub fn should_fetch_unfiltered(&self) -> bool {
        self.filtered.is_none() && self.needs_reload
    }

    /// Changes whenever a new unfiltered fetch should start: `Some` while
    /// the list is stale and visible, with a fresh value after each listing
    pub fn reload_key(&self) -> Option<u64> {
        self.should_fetch_unfiltered().then_some(self.reload_generation)
    }

    /// Start a request on `lane`, superseding any in flight there
    pub fn issue(&mut self, lane: RequestLane) -> RequestToken {
        self.next_seq += 1;
        let seq = self.next_seq;
        match lane {
            RequestLane::Filter => self.latest_filter = Some(seq),
            RequestLane::Unfiltered => self.latest_unfiltered = Some(seq),
        }
        RequestToken { lane, seq }
    }

    fn is_current(&self, token: RequestToken) -> bool {
        let latest = match token.lane {
            RequestLane::Filter => self.latest_filter,
            RequestLane::Unfiltered => self.latest_unfiltered,
        };
        latest == Some(token.seq)
    }

    pub fn reduce(&mut self, action: ViewAction) -> Reduced {
        match action {
            ViewAction::FilterResolved { token, page } => {
                if !self.is_current(token) || token.lane != RequestLane::Filter {
                    return Reduced::Stale;
                }
                self.filtered = Some(page);
            }
            ViewAction::FilterCleared { token } => {
                if !self.is_current(token) || token.lane != RequestLane::Filter {
                    return Reduced::Stale;
                }
                self.filtered = None;
            }
            ViewAction::UnfilteredLoaded { token, page } => {
                if !self.is_current(token) || token.lane != RequestLane::Unfiltered {
                    return Reduced::Stale;
                }
                self.unfiltered = page;
                self.needs_reload = false;
            }
            ViewAction::ListingCompleted => {
                // loads already in flight predate the new listing
                self.latest_unfiltered = None;
                self.needs_reload = true;
                self.reload_generation += 1;
            }
        }
        Reduced::Applied
    }
}
