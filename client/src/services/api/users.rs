//! # User Management Endpoints

use serde_json::Value;
use shared::{ApiResponse, PageRequest, PaginatedResponse, User, UserCreateRequest, UserFilter, UserStats, UserUpdateRequest};

use super::client::ApiClient;
use super::request::QueryParams;
use crate::core::error::ApiResult;

pub async fn get_all(
    client: &ApiClient,
    page: PageRequest,
    filter: &UserFilter,
) -> ApiResult<ApiResponse<PaginatedResponse<User>>> {
    let query = QueryParams::new()
        .push("page", page.page)
        .push("size", page.size)
        .push_opt("role", filter.role.as_ref())
        .push_opt("search", filter.search.as_deref());
    client.get("/users", query).await
}

pub async fn get_by_id(client: &ApiClient, id: i64) -> ApiResult<ApiResponse<User>> {
    client.get(&format!("/users/{id}"), QueryParams::new()).await
}

pub async fn create(client: &ApiClient, request: &UserCreateRequest) -> ApiResult<ApiResponse<User>> {
    tracing::info!(nycu_id = %request.nycu_id, role = %request.role, "Creating user");
    client.post("/users", request).await
}

pub async fn update(client: &ApiClient, id: i64, request: &UserUpdateRequest) -> ApiResult<ApiResponse<User>> {
    client.put(&format!("/users/{id}"), request).await
}

pub async fn delete(client: &ApiClient, id: i64) -> ApiResult<ApiResponse<Value>> {
    tracing::info!(user_id = id, "Deleting user");
    client.delete(&format!("/users/{id}")).await
}

pub async fn get_stats(client: &ApiClient) -> ApiResult<ApiResponse<UserStats>> {
    client.get("/users/stats", QueryParams::new()).await
}
