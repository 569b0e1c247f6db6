//! # Admin Endpoints
//!
//! Dashboard, application oversight and system announcements. All calls
//! require an admin or super admin session.

use shared::{
    Announcement, AnnouncementCreateRequest, ApiResponse, Application, ApplicationStatus, DashboardStats, PageRequest,
    PaginatedResponse, StatusUpdateRequest,
};

use super::client::ApiClient;
use super::request::QueryParams;
use crate::core::error::ApiResult;

pub async fn get_dashboard_stats(client: &ApiClient) -> ApiResult<ApiResponse<DashboardStats>> {
    client.get("/admin/dashboard/stats", QueryParams::new()).await
}

/// One page of all applications, optionally filtered by status.
pub async fn get_all_applications(
    client: &ApiClient,
    page: PageRequest,
    status: Option<&ApplicationStatus>,
) -> ApiResult<ApiResponse<PaginatedResponse<Application>>> {
    let query = QueryParams::new()
        .push("page", page.page)
        .push("size", page.size)
        .push_opt("status", status);
    client.get("/admin/applications", query).await
}

pub async fn get_recent_applications(client: &ApiClient, limit: Option<u32>) -> ApiResult<ApiResponse<Vec<Application>>> {
    client
        .get("/admin/recent-applications", QueryParams::new().push_opt("limit", limit))
        .await
}

pub async fn update_application_status(
    client: &ApiClient,
    id: i64,
    request: &StatusUpdateRequest,
) -> ApiResult<ApiResponse<Application>> {
    tracing::info!(application_id = id, status = %request.status, "Admin status update");
    client.patch(&format!("/admin/applications/{id}/status"), request).await
}

pub async fn get_announcements(
    client: &ApiClient,
    page: PageRequest,
) -> ApiResult<ApiResponse<PaginatedResponse<Announcement>>> {
    let query = QueryParams::new().push("page", page.page).push("size", page.size);
    client.get("/admin/system-announcements", query).await
}

pub async fn create_announcement(
    client: &ApiClient,
    request: &AnnouncementCreateRequest,
) -> ApiResult<ApiResponse<Announcement>> {
    client.post("/admin/system-announcements", request).await
}
