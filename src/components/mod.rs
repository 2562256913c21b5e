//! UI Components
//!
//! Leptos components for the storefront page.

mod item_list;
mod search_bar;
mod listing_form;

pub use item_list::ItemList;
pub use search_bar::SearchBar;
pub use listing_form::ListingForm;
