//! # Common Error Types
//!
//! Every call through the request layer ends in either an
//! [`ApiResponse`](shared::ApiResponse) or exactly one [`ApiError`].
//!
//! ## Error Categories
//!
//! - **Transport**: the request never produced an HTTP response (connection
//!   refused, DNS failure, timeout). Carries the transport's own message.
//! - **Unauthorized** (401): the stored token has already been cleared.
//! - **Forbidden** (403): token is kept.
//! - **RateLimited** (429): message is prefixed for rate limiting.
//! - **Http**: any other non-2xx status, message taken from the body.
//! - **Validation**: a 2xx payload did not match the expected type while
//!   strict validation was in effect. Carries the original payload.
//! - **Decode** / **Encode** / **Config**: local failures.
//!
//! A 2xx body that the backend itself marks `success: false` is *not* an
//! error; it is returned as a normal envelope.
//!
//! ```rust
//! use scholarship_client::core::error::ApiError;
//!
//! let err = ApiError::Http { status: 404, message: "Application not found".into(), body: serde_json::Value::Null };
//! assert_eq!(err.status(), Some(404));
//! assert_eq!(err.to_string(), "Application not found");
//! ```

use serde_json::Value;
use thiserror::Error;

/// Failure raised by an [`HttpTransport`](crate::core::service::HttpTransport)
/// before any HTTP response was available.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Connect,
    Timeout,
    Request,
    Body,
    Other,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Other, message)
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == TransportErrorKind::Timeout
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else if err.is_body() || err.is_decode() {
            TransportErrorKind::Body
        } else if err.is_builder() || err.is_request() {
            TransportErrorKind::Request
        } else {
            TransportErrorKind::Other
        };
        Self::new(kind, err.to_string())
    }
}

/// Error type of the request layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure, passed through untouched.
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("{message}")]
    RateLimited { message: String },

    /// Non-2xx business or server failure.
    #[error("{message}")]
    Http { status: u16, message: String, body: Value },

    /// Payload did not match the expected response type.
    #[error("Response validation failed: {message}")]
    Validation {
        message: String,
        payload: Value,
        details: Vec<String>,
    },

    /// Response body declared JSON but could not be parsed.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status for errors that came from an HTTP response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Forbidden { .. } => Some(403),
            ApiError::RateLimited { .. } => Some(429),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Encode(err.to_string())
    }
}
