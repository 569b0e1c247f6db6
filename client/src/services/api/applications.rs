//! # Application Endpoints
//!
//! Student-side application lifecycle plus documents and reviews. Status
//! transitions are requested here and decided by the backend.

use serde_json::Value;
use shared::{
    ApiResponse, Application, ApplicationCreateRequest, ApplicationDocument, ApplicationReview, ApplicationStatus,
    ApplicationUpdateRequest, ReviewSubmitRequest, StatusUpdateRequest,
};

use super::client::ApiClient;
use super::request::{MultipartForm, QueryParams, RequestOptions};
use crate::core::error::ApiResult;

/// A file to attach to an application or profile.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Single-part form with the file under the `file` field.
    pub(crate) fn into_form(self) -> MultipartForm {
        MultipartForm::new().file("file", self.file_name, self.mime_type, self.bytes)
    }
}

pub async fn create(client: &ApiClient, request: &ApplicationCreateRequest) -> ApiResult<ApiResponse<Application>> {
    tracing::info!(scholarship_type = %request.scholarship_type, is_draft = request.is_draft, "Creating application");
    client.post("/applications", request).await
}

/// Applications of the signed-in student, optionally by status.
pub async fn get_my_applications(
    client: &ApiClient,
    status: Option<&ApplicationStatus>,
) -> ApiResult<ApiResponse<Vec<Application>>> {
    client.get("/applications", QueryParams::new().push_opt("status", status)).await
}

pub async fn get_by_id(client: &ApiClient, id: i64) -> ApiResult<ApiResponse<Application>> {
    client.get(&format!("/applications/{id}"), QueryParams::new()).await
}

pub async fn update(client: &ApiClient, id: i64, request: &ApplicationUpdateRequest) -> ApiResult<ApiResponse<Application>> {
    client.put(&format!("/applications/{id}"), request).await
}

pub async fn submit(client: &ApiClient, id: i64) -> ApiResult<ApiResponse<Application>> {
    client.request(&format!("/applications/{id}/submit"), RequestOptions::post()).await
}

pub async fn withdraw(client: &ApiClient, id: i64) -> ApiResult<ApiResponse<Application>> {
    client.request(&format!("/applications/{id}/withdraw"), RequestOptions::post()).await
}

/// Request a status transition (reviewer or admin).
pub async fn update_status(
    client: &ApiClient,
    id: i64,
    request: &StatusUpdateRequest,
) -> ApiResult<ApiResponse<Application>> {
    tracing::info!(application_id = id, status = %request.status, "Updating application status");
    client.patch(&format!("/applications/{id}/status"), request).await
}

/// Attach a document of `file_type` to an application.
#[tracing::instrument(skip(client, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
pub async fn upload_file(
    client: &ApiClient,
    id: i64,
    file_type: &str,
    file: FileUpload,
) -> ApiResult<ApiResponse<ApplicationDocument>> {
    let query = QueryParams::new().push("file_type", file_type);
    client.upload(&format!("/applications/{id}/files/upload"), file.into_form(), query).await
}

pub async fn get_files(client: &ApiClient, id: i64) -> ApiResult<ApiResponse<Vec<ApplicationDocument>>> {
    client.get(&format!("/applications/{id}/files"), QueryParams::new()).await
}

pub async fn delete_file(client: &ApiClient, id: i64, file_id: i64) -> ApiResult<ApiResponse<Value>> {
    client.delete(&format!("/applications/{id}/files/{file_id}")).await
}

pub async fn submit_review(
    client: &ApiClient,
    id: i64,
    review: &ReviewSubmitRequest,
) -> ApiResult<ApiResponse<ApplicationReview>> {
    client.post(&format!("/applications/{id}/review"), review).await
}

pub async fn get_reviews(client: &ApiClient, id: i64) -> ApiResult<ApiResponse<Vec<ApplicationReview>>> {
    client.get(&format!("/applications/{id}/reviews"), QueryParams::new()).await
}
