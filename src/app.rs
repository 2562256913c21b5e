//! Simple Mercari App
//!
//! Root component: header with search, listing form, item list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ItemList, ListingForm, SearchBar};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(AppConfig::from_env());
    provide_context(ctx);

    // Refetch the unfiltered list each time the reload key changes to a new value
    let reload_key = ctx.reload_key();
    Effect::new(move |_| {
        if reload_key.get().is_some() {
            let coordinator = ctx.coordinator();
            spawn_local(async move {
                coordinator.load_unfiltered().await;
            });
        }
    });

    let on_category_click = Callback::new(move |category: String| {
        let coordinator = ctx.coordinator();
        spawn_local(async move {
            coordinator.on_category_clicked(&category).await;
        });
    });

    view! {
        <div>
            <header class="Title">
                <div>
                    <p><b>"Simple Mercari"</b></p>
                </div>
                <div>
                    <SearchBar />
                </div>
            </header>

            <div>
                <ListingForm />
            </div>

            <div>
                <ItemList items=ctx.displayed() on_category_click=on_category_click />
            </div>
        </div>
    }
}
