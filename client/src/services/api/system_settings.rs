//! # System Settings Endpoints

use shared::{ApiResponse, SystemSetting, SystemSettingUpdate};

use super::client::ApiClient;
use super::request::{path_segment, QueryParams};
use crate::core::error::ApiResult;

pub async fn get_all(client: &ApiClient, category: Option<&str>) -> ApiResult<ApiResponse<Vec<SystemSetting>>> {
    client
        .get("/system-settings", QueryParams::new().push_opt("category", category))
        .await
}

pub async fn get(client: &ApiClient, key: &str) -> ApiResult<ApiResponse<SystemSetting>> {
    client.get(&format!("/system-settings/{}", path_segment(key)), QueryParams::new()).await
}

pub async fn update(client: &ApiClient, key: &str, update: &SystemSettingUpdate) -> ApiResult<ApiResponse<SystemSetting>> {
    tracing::info!(key, "Updating system setting");
    client.put(&format!("/system-settings/{}", path_segment(key)), update).await
}
