//! # Authentication Endpoints
//!
//! Login, token refresh and the current-user lookup. A successful login or
//! refresh stores the issued token in the client's [`TokenStore`].
//!
//! [`TokenStore`]: super::token::TokenStore

use shared::{ApiResponse, LoginRequest, TokenResponse, UserInfo};

use super::client::ApiClient;
use super::request::{QueryParams, RequestOptions};
use crate::core::error::ApiResult;

/// Login with username and password.
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn login(client: &ApiClient, username: &str, password: &str) -> ApiResult<ApiResponse<TokenResponse>> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response: ApiResponse<TokenResponse> = client.post("/auth/login", &request).await?;

    match (&response.data, response.success) {
        (Some(token), true) => {
            client.tokens().set_token(token.access_token.clone());
            tracing::info!(duration_ms = start.elapsed().as_millis() as u64, "Login successful");
        }
        _ => tracing::warn!(message = %response.message, "Login response carried no token"),
    }
    Ok(response)
}

/// Exchange the current token for a fresh one.
pub async fn refresh_token(client: &ApiClient) -> ApiResult<ApiResponse<TokenResponse>> {
    let response: ApiResponse<TokenResponse> = client.request("/auth/refresh", RequestOptions::post()).await?;
    if let (Some(token), true) = (&response.data, response.success) {
        client.tokens().set_token(token.access_token.clone());
    }
    Ok(response)
}

/// Profile of the signed-in user.
pub async fn get_current_user(client: &ApiClient) -> ApiResult<ApiResponse<UserInfo>> {
    client.get("/auth/me", QueryParams::new()).await
}

/// Forget the local session. The backend keeps no session state to revoke.
pub fn logout(client: &ApiClient) {
    client.tokens().clear_token();
    tracing::info!("Logged out");
}
