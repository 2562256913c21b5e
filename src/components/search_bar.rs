//! Search Bar Component
//!
//! Keyword form; submission policy lives in [`crate::search`].

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::search;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let (keyword, set_keyword) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let keyword = keyword.get();
        let coordinator = ctx.coordinator();
        spawn_local(async move {
            search::submit(&coordinator, &keyword).await;
        });
    };

    view! {
        <div class="Search">
            <form on:submit=on_submit>
                <div>
                    <button type="submit" class="button">"search"</button>
                    <input
                        type="text"
                        name="keyword"
                        id="keyword"
                        placeholder="keyword"
                        prop:value=move || keyword.get()
                        on:input=move |ev| set_keyword.set(event_target_value(&ev))
                    />
                </div>
            </form>
        </div>
    }
}
