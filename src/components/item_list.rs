//! Item List Component
//!
//! Renders whichever items it is given; clicking a category tag reports it.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Item;

#[component]
pub fn ItemList(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] on_category_click: Callback<String>,
) -> impl IntoView {
    let config = use_app_context().config;

    let rows = move || items.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="ItemListContainer">
            <Show
                when=move || !items.with(Vec::is_empty)
                fallback=|| view! { <p>"No items found."</p> }
            >
                <For
                    each=rows
                    key=|(index, item)| (*index, item.id, item.name.clone(), item.category.clone())
                    children=move |(_, item)| {
                        let image_url = config.image_url(&item);
                        let category = item.category.clone();
                        view! {
                            <div class="ItemList">
                                <img src=image_url alt=item.name.clone() class="itemImage" />
                                <p class="info">
                                    <span>"Name: " {item.name.clone()}</span>
                                    <br />
                                    <span>"Category: " {item.category.clone()}</span>
                                </p>
                                <p
                                    class="tag"
                                    on:click=move |_| on_category_click.run(category.clone())
                                >
                                    {item.category.clone()}
                                </p>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
