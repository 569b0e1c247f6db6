//! # Core Abstractions
//!
//! Error types and dependency-injection traits used throughout the client.
//!
//! - **[`error`]**: [`ApiError`], [`TransportError`], [`ApiResult<T>`]
//! - **[`service`]**: [`HttpTransport`] and [`TokenStorage`] traits
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use scholarship_client::core::service::HttpTransport;
//! use scholarship_client::services::api::transport::ReqwestTransport;
//!
//! // In production: reqwest
//! let transport: Arc<dyn HttpTransport> =
//!     Arc::new(ReqwestTransport::new(std::time::Duration::from_secs(30)));
//! // In tests: a recording mock implementing the same trait
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, ApiResult, TransportError, TransportErrorKind};
pub use service::{HttpTransport, TokenStorage};
