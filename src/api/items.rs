//! Item Queries
//!
//! `GET /items` and `GET /search`.

use tracing::debug;

use super::{read_json, send, ApiClient};
use crate::error::ApiResult;
use crate::models::ItemsResponse;

impl ApiClient {
    pub(super) async fn get_items(&self) -> ApiResult<ItemsResponse> {
        let response = send(self.http.get(self.url("/items"))).await?;
        let data: ItemsResponse = read_json(response).await?;
        debug!(count = data.items.len(), "GET /items success");
        Ok(data)
    }

    pub(super) async fn get_search(&self, keyword: &str) -> ApiResult<ItemsResponse> {
        let request = self
            .http
            .get(self.url("/search"))
            .query(&[("keyword", keyword)]);
        let response = send(request).await?;
        let data: ItemsResponse = read_json(response).await?;
        debug!(keyword, count = data.items.len(), "GET /search success");
        Ok(data)
    }
}
