//! # Service Traits
//!
//! Seams for dependency injection: the HTTP transport and the durable token
//! storage are both swappable, so the request layer can be exercised without
//! a network or a filesystem.

use async_trait::async_trait;

use super::error::TransportError;
use crate::services::api::request::{HttpRequest, HttpResponse};

/// Sends one fully-built request and returns the raw response.
///
/// Implementations must not interpret the status code; any HTTP response,
/// including 4xx/5xx, is `Ok`. Only failures that prevent a response from
/// existing are `Err`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Durable backing for the bearer token.
///
/// Failures are reported to the [`TokenStore`](crate::services::api::token::TokenStore),
/// which logs them and carries on with the in-memory copy.
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> std::io::Result<Option<String>>;

    fn save(&self, token: &str) -> std::io::Result<()>;

    fn clear(&self) -> std::io::Result<()>;
}
