//! Listing Form Component
//!
//! Name, category and image inputs for creating a new item.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::context::use_app_context;
use crate::listing;
use crate::models::{ImageUpload, NewListing};

/// Read the picked file into memory
async fn read_upload(file: web_sys::File) -> Result<ImageUpload, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let content_type = match file.type_() {
        t if t.is_empty() => "application/octet-stream".to_string(),
        t => t,
    };
    Ok(ImageUpload {
        file_name: file.name(),
        content_type,
        bytes,
    })
}

#[component]
pub fn ListingForm() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (image, set_image) = signal::<Option<ImageUpload>>(None);
    let file_input = NodeRef::<html::Input>::new();

    let on_file_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            set_image.set(None);
            return;
        };
        spawn_local(async move {
            match read_upload(file).await {
                Ok(upload) => set_image.set(Some(upload)),
                Err(e) => {
                    error!(error = ?e, "failed to read image file");
                    set_image.set(None);
                }
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_listing = NewListing {
            name: name.get(),
            category: category.get(),
            image: image.get(),
        };
        let coordinator = ctx.coordinator();
        spawn_local(async move {
            if listing::submit(&coordinator, &new_listing).await {
                set_name.set(String::new());
                set_category.set(String::new());
                set_image.set(None);
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
            }
        });
    };

    view! {
        <div class="Listing">
            <form on:submit=on_submit>
                <div>
                    <input
                        type="text"
                        name="name"
                        id="name"
                        placeholder="name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        name="category"
                        id="category"
                        placeholder="category"
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />
                    <input
                        type="file"
                        name="image"
                        id="image"
                        accept="image/*"
                        node_ref=file_input
                        on:change=on_file_change
                    />
                    <button type="submit">"List this item"</button>
                </div>
            </form>
        </div>
    }
}
