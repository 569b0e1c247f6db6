//! # API Client
//!
//! Request executor for the scholarship backend: builds the request (URL,
//! query, headers, body), hands it to the transport, classifies the status
//! and resolves to a normalized [`ApiResponse`] or an [`ApiError`].

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::ApiResponse;

use super::events::{SessionEvent, SessionEvents};
use super::normalize;
use super::request::{HttpRequest, MultipartForm, QueryParams, RequestOptions};
use super::response;
use super::token::{FileTokenStorage, TokenStore};
use super::transport::ReqwestTransport;
use crate::config::ApiConfig;
use crate::core::error::{ApiError, ApiResult};
use crate::core::service::HttpTransport;

/// Version prefix every endpoint path is resolved under.
pub const API_PREFIX: &str = "/api/v1";

/// Client for the scholarship backend REST API.
///
/// Cheap to share behind an `Arc`; all state that changes at runtime lives
/// in the injected [`TokenStore`].
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    tokens: Arc<TokenStore>,
    events: SessionEvents,
    config: ApiConfig,
}

impl ApiClient {
    /// Client using reqwest and, when configured, a file-backed token.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        config.validate()?;

        let tokens = match &config.token_file {
            Some(path) => TokenStore::with_storage(Arc::new(FileTokenStorage::new(path))),
            None => TokenStore::in_memory(),
        };
        let transport = ReqwestTransport::new(config.timeout);

        tracing::info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            development = config.development,
            persistent_token = config.token_file.is_some(),
            "API client initialized"
        );

        Ok(Self::with_transport(config, Arc::new(transport), Arc::new(tokens)))
    }

    /// Client with an explicit transport and token store.
    pub fn with_transport(config: ApiConfig, transport: Arc<dyn HttpTransport>, tokens: Arc<TokenStore>) -> Self {
        Self {
            transport,
            tokens,
            events: SessionEvents::new(),
            config,
        }
    }

    pub fn tokens(&self) -> &Arc<TokenStore> {
        &self.tokens
    }

    pub fn session_events(&self) -> &SessionEvents {
        &self.events
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `{base_url}/api/v1{path}` plus the encoded query, if any.
    pub fn endpoint_url(&self, path: &str, query: &QueryParams) -> String {
        let separator = if path.starts_with('/') { "" } else { "/" };
        let mut url = format!("{}{}{}{}", self.config.base_url, API_PREFIX, separator, path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.to_query_string());
        }
        url
    }

    /// Build the transport request. The current token is captured here.
    pub fn build_request(&self, path: &str, options: RequestOptions) -> HttpRequest {
        let RequestOptions { method, body, headers: extra, query, .. } = options;

        let mut headers = Vec::with_capacity(3 + extra.len());
        if !body.is_multipart() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        headers.push(("Accept".to_string(), "application/json".to_string()));
        if let Some(token) = self.tokens.get_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        headers.extend(extra);

        HttpRequest {
            method,
            url: self.endpoint_url(path, &query),
            headers,
            body,
        }
    }

    /// Execute a call and decode the envelope payload as `T`.
    pub async fn request<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> ApiResult<ApiResponse<T>> {
        let validation = options.validation;
        let envelope = self.execute(path, options).await?;
        normalize::decode(envelope, validation, self.config.development)
    }

    /// Execute a call and return the normalized, untyped envelope.
    #[tracing::instrument(skip(self, options), fields(method = %options.method, path = %path))]
    pub async fn execute(&self, path: &str, options: RequestOptions) -> ApiResult<ApiResponse<Value>> {
        let start = Instant::now();
        let request = self.build_request(path, options);

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!(error = %e, kind = ?e.kind, "Request transport failure");
            ApiError::Transport(e)
        })?;

        let status = response.status;
        let duration_ms = start.elapsed().as_millis() as u64;
        // An unreadable error body must not mask the status handling below
        let payload = match response::read_body(&response) {
            Ok(payload) => payload,
            Err(e) if response.is_success() => return Err(e),
            Err(_) => Value::String(String::from_utf8_lossy(&response.body).into_owned()),
        };

        if response.is_success() {
            tracing::debug!(status, duration_ms, "Request completed");
            return Ok(normalize::normalize(payload, response.header("x-trace-id")));
        }

        match status {
            401 => {
                let message = response::error_message(&payload, status, &response.status_text);
                tracing::warn!(status, duration_ms, %message, "Session rejected, clearing token");
                self.tokens.clear_token();
                self.events.emit(SessionEvent::Expired { message: message.clone() });
                Err(ApiError::Unauthorized { message })
            }
            403 => {
                let message = response::error_message(&payload, status, &response.status_text);
                tracing::warn!(status, duration_ms, %message, "Request forbidden");
                self.events.emit(SessionEvent::Forbidden { message: message.clone() });
                Err(ApiError::Forbidden { message })
            }
            429 => {
                let message = response::rate_limit_message(&payload);
                tracing::warn!(status, duration_ms, %message, "Rate limited");
                Err(ApiError::RateLimited { message })
            }
            _ => {
                let message = response::error_message(&payload, status, &response.status_text);
                if status >= 500 {
                    tracing::error!(status, duration_ms, %message, "Request failed");
                } else {
                    tracing::warn!(status, duration_ms, %message, "Request failed");
                }
                Err(ApiError::Http { status, message, body: payload })
            }
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: QueryParams) -> ApiResult<ApiResponse<T>> {
        self.request(path, RequestOptions::get().query(query)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<ApiResponse<T>> {
        self.request(path, RequestOptions::post().json(body)?).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<ApiResponse<T>> {
        self.request(path, RequestOptions::put().json(body)?).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<ApiResponse<T>> {
        self.request(path, RequestOptions::patch().json(body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<ApiResponse<T>> {
        self.request(path, RequestOptions::delete()).await
    }

    /// `POST` a multipart form.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
        query: QueryParams,
    ) -> ApiResult<ApiResponse<T>> {
        self.request(path, RequestOptions::post().multipart(form).query(query)).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("tokens", &self.tokens)
            .finish()
    }
}

