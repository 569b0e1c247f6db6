//! # User Profile Endpoints

use shared::{ApiResponse, UserProfile, UserProfileUpdate};

use super::applications::FileUpload;
use super::client::ApiClient;
use super::request::QueryParams;
use crate::core::error::ApiResult;

pub async fn get_my_profile(client: &ApiClient) -> ApiResult<ApiResponse<UserProfile>> {
    client.get("/user-profiles/me", QueryParams::new()).await
}

pub async fn update_my_profile(client: &ApiClient, update: &UserProfileUpdate) -> ApiResult<ApiResponse<UserProfile>> {
    client.put("/user-profiles/me", update).await
}

/// Upload the bank book photo used for scholarship payments.
pub async fn upload_bank_document(client: &ApiClient, file: FileUpload) -> ApiResult<ApiResponse<UserProfile>> {
    client
        .upload("/user-profiles/me/bank-document", file.into_form(), QueryParams::new())
        .await
}
