//! # API Client Tests
//!
//! Executor and resource-module scenarios run against a recording
//! [`MockTransport`] instead of a live backend.

mod modules;
mod session;

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::client::ApiClient;
use super::request::{HttpRequest, HttpResponse};
use super::token::TokenStore;
use crate::config::ApiConfig;
use crate::core::error::TransportError;
use crate::core::service::HttpTransport;

pub const BASE_URL: &str = "http://backend.test";

type Hook = Box<dyn Fn(&HttpRequest) + Send + Sync>;

/// Transport that records every request and replays queued outcomes.
///
/// With the queue empty it answers `200 {}`.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    on_send: Option<Hook>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` inside `send`, after the request was built and before it resolves.
    pub fn with_hook(hook: impl Fn(&HttpRequest) + Send + Sync + 'static) -> Self {
        Self {
            on_send: Some(Box::new(hook)),
            ..Self::default()
        }
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, "application/json", body.to_string().into_bytes());
    }

    pub fn push_raw(&self, status: u16, content_type: &str, body: impl Into<Vec<u8>>) {
        self.outcomes.lock().push_back(Ok(HttpResponse {
            status,
            status_text: status_text(status).to_string(),
            headers: vec![("content-type".to_string(), content_type.to_string())],
            body: body.into(),
        }));
    }

    pub fn push_response(&self, response: HttpResponse) {
        self.outcomes.lock().push_back(Ok(response));
    }

    pub fn push_error(&self, error: TransportError) {
        self.outcomes.lock().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().last().cloned().expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if let Some(hook) = &self.on_send {
            hook(&request);
        }
        self.requests.lock().push(request);
        self.outcomes.lock().pop_front().unwrap_or_else(|| {
            Ok(HttpResponse {
                status: 200,
                status_text: "OK".to_string(),
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: b"{}".to_vec(),
            })
        })
    }
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "",
    }
}

/// Lenient (production-like) config against [`BASE_URL`].
pub fn test_config() -> ApiConfig {
    ApiConfig {
        development: false,
        token_file: None,
        ..ApiConfig::with_base_url(BASE_URL)
    }
}

/// Client over a fresh mock transport and in-memory token store.
pub fn test_client() -> (ApiClient, Arc<MockTransport>) {
    test_client_with(MockTransport::new(), Arc::new(TokenStore::in_memory()))
}

pub fn test_client_with(transport: MockTransport, tokens: Arc<TokenStore>) -> (ApiClient, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let client = ApiClient::with_transport(test_config(), transport.clone(), tokens);
    (client, transport)
}

/// Client with development-build validation (strict by default).
pub fn development_client() -> (ApiClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new());
    let config = ApiConfig {
        development: true,
        ..test_config()
    };
    let client = ApiClient::with_transport(config, transport.clone(), Arc::new(TokenStore::in_memory()));
    (client, transport)
}

/// Full URL for `path` under the API prefix.
pub fn url(path: &str) -> String {
    format!("{BASE_URL}/api/v1{path}")
}
