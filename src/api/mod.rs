//! Items API Client
//!
//! HTTP bindings to the items backend, organized by endpoint.

mod items;
mod listing;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{ItemsResponse, NewListing};

/// Remote operations the view layer depends on.
///
/// `?Send` because every call runs on the browser's single UI thread.
#[async_trait(?Send)]
pub trait ItemApi {
    /// Unfiltered item list
    async fn fetch_items(&self) -> ApiResult<ItemsResponse>;
    /// Items matching `keyword`; the keyword is sent as given
    async fn search_items(&self, keyword: &str) -> ApiResult<ItemsResponse>;
    /// Create a new listing
    async fn add_item(&self, listing: &NewListing) -> ApiResult<()>;
}

/// reqwest-backed client for the items backend
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }
}

#[async_trait(?Send)]
impl ItemApi for ApiClient {
    async fn fetch_items(&self) -> ApiResult<ItemsResponse> {
        self.get_items().await
    }

    async fn search_items(&self, keyword: &str) -> ApiResult<ItemsResponse> {
        self.get_search(keyword).await
    }

    async fn add_item(&self, listing: &NewListing) -> ApiResult<()> {
        self.post_item(listing).await
    }
}

/// Send a request and map non-2xx statuses to [`ApiError::Status`]
async fn send(request: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(response)
}

/// Read a JSON body; decode failures stay distinct from transport failures
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
