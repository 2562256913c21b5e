//! Listing Creation
//!
//! `POST /items` as multipart form data.

use reqwest::multipart::{Form, Part};
use tracing::info;

use super::{send, ApiClient};
use crate::error::ApiResult;
use crate::models::NewListing;

/// Multipart body with `name`, `category` and an optional `image` file part
fn build_form(listing: &NewListing) -> ApiResult<Form> {
    let mut form = Form::new()
        .text("name", listing.name.clone())
        .text("category", listing.category.clone());

    if let Some(image) = &listing.image {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)?;
        form = form.part("image", part);
    }
    Ok(form)
}

impl ApiClient {
    pub(super) async fn post_item(&self, listing: &NewListing) -> ApiResult<()> {
        let form = build_form(listing)?;
        send(self.http.post(self.url("/items")).multipart(form)).await?;
        info!(name = %listing.name, category = %listing.category, "POST /items success");
        Ok(())
    }
}
