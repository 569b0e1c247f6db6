//! # Application Form Configuration Endpoints
//!
//! Per scholarship type: which form fields and documents an application
//! asks for.

use shared::{ApiResponse, ApplicationDocumentConfig, ApplicationField, ApplicationFieldUpdate, ApplicationFormConfig};

use super::client::ApiClient;
use super::request::{path_segment, QueryParams};
use crate::core::error::ApiResult;

pub async fn get_form_config(client: &ApiClient, scholarship_type: &str) -> ApiResult<ApiResponse<ApplicationFormConfig>> {
    client
        .get(&format!("/application-fields/form-config/{}", path_segment(scholarship_type)), QueryParams::new())
        .await
}

pub async fn get_fields(client: &ApiClient, scholarship_type: &str) -> ApiResult<ApiResponse<Vec<ApplicationField>>> {
    client
        .get(&format!("/application-fields/fields/{}", path_segment(scholarship_type)), QueryParams::new())
        .await
}

pub async fn update_field(
    client: &ApiClient,
    field_id: i64,
    update: &ApplicationFieldUpdate,
) -> ApiResult<ApiResponse<ApplicationField>> {
    client.put(&format!("/application-fields/fields/{field_id}"), update).await
}

pub async fn get_documents(
    client: &ApiClient,
    scholarship_type: &str,
) -> ApiResult<ApiResponse<Vec<ApplicationDocumentConfig>>> {
    client
        .get(&format!("/application-fields/documents/{}", path_segment(scholarship_type)), QueryParams::new())
        .await
}
