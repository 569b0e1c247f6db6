//! # Scholarship Endpoints

use shared::{ApiResponse, EligibleScholarship, Scholarship, ScholarshipFilter};

use super::client::ApiClient;
use super::request::QueryParams;
use crate::core::error::ApiResult;

/// List scholarships, optionally filtered.
pub async fn get_all(client: &ApiClient, filter: &ScholarshipFilter) -> ApiResult<ApiResponse<Vec<Scholarship>>> {
    let query = QueryParams::new()
        .push_opt("category", filter.category.as_deref())
        .push_opt("academic_year", filter.academic_year)
        .push_opt("semester", filter.semester.as_deref())
        .push_opt("is_active", filter.is_active);
    client.get("/scholarships", query).await
}

pub async fn get_by_id(client: &ApiClient, id: i64) -> ApiResult<ApiResponse<Scholarship>> {
    client.get(&format!("/scholarships/{id}"), QueryParams::new()).await
}

/// Scholarships the signed-in student currently qualifies for.
pub async fn get_eligible(client: &ApiClient) -> ApiResult<ApiResponse<Vec<EligibleScholarship>>> {
    client.get("/scholarships/eligible", QueryParams::new()).await
}
