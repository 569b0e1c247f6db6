//! # Notification Endpoints

use serde_json::Value;
use shared::{ApiResponse, Notification, PageRequest, UnreadCount};

use super::client::ApiClient;
use super::request::{QueryParams, RequestOptions};
use crate::core::error::ApiResult;

/// Notifications for the signed-in user. `unread_only = false` omits the filter.
pub async fn get_all(
    client: &ApiClient,
    unread_only: bool,
    page: Option<PageRequest>,
) -> ApiResult<ApiResponse<Vec<Notification>>> {
    let query = QueryParams::new()
        .push_opt("unread_only", unread_only.then_some(true))
        .push_opt("page", page.map(|p| p.page))
        .push_opt("size", page.map(|p| p.size));
    client.get("/notifications", query).await
}

/// Unread count, whether the backend answers `{"count": n}` or a bare number.
pub async fn get_unread_count(client: &ApiClient) -> ApiResult<ApiResponse<u64>> {
    let response: ApiResponse<UnreadCount> = client.get("/notifications/unread-count", QueryParams::new()).await?;
    Ok(response.map(UnreadCount::value))
}

pub async fn mark_as_read(client: &ApiClient, id: i64) -> ApiResult<ApiResponse<Value>> {
    client.request(&format!("/notifications/{id}/read"), RequestOptions::patch()).await
}

pub async fn mark_all_as_read(client: &ApiClient) -> ApiResult<ApiResponse<Value>> {
    client.request("/notifications/read-all", RequestOptions::patch()).await
}
