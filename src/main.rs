//! Simple Mercari Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod coordinator;
mod error;
mod listing;
mod models;
mod notify;
mod search;
mod view_state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
