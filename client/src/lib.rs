//! # Scholarship API Client - Library Root
//!
//! Typed async client for the scholarship application management backend.
//! This library crate contains all modules used by the `scholarship` binary
//! (`main.rs`) and by applications embedding the client.
//!
//! ## Features
//!
//! - **Uniform envelopes**: every successful call resolves to an
//!   [`ApiResponse`](shared::ApiResponse), whatever shape the backend returned
//! - **Typed errors**: transport failures, 401/403/429 and other HTTP
//!   failures are distinct [`ApiError`](crate::core::error::ApiError) variants
//! - **Session handling**: bearer token store with optional file persistence;
//!   a 401 clears it and notifies [`SessionEvents`](services::api::SessionEvents)
//!   subscribers
//! - **Resource modules**: one module per backend resource family
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │          scholarship-client (this crate)               │
//! ├────────────────────────────────────────────────────────┤
//! │  Reqwest       - HTTP transport (rustls, multipart)    │
//! │  Tokio         - Async runtime                         │
//! │  Serde         - JSON (de)serialization                │
//! │  Tracing       - Structured logging                    │
//! │  Clap          - CLI parsing                           │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP/JSON  {base_url}/api/v1/...
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`config`] - Environment-driven client configuration
//! - [`core`] - Error types and service traits (transport, token storage)
//! - [`debug`] - Logging initialization
//! - [`services`] - API client and resource modules
//! - [`cli`] / [`commands`] - `scholarship` command-line interface
//!
//! ## Example
//!
//! ```no_run
//! use scholarship_client::config::ApiConfig;
//! use scholarship_client::services::api::{applications, auth, ApiClient};
//!
//! # async fn run() -> scholarship_client::core::error::ApiResult<()> {
//! let client = ApiClient::new(ApiConfig::from_env()?)?;
//! auth::login(&client, "student01", "secret").await?;
//! let mine = applications::get_my_applications(&client, None).await?;
//! println!("{} applications", mine.data.map(|apps| apps.len()).unwrap_or(0));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;

pub use config::ApiConfig;
pub use crate::core::error::{ApiError, ApiResult};
pub use services::api::ApiClient;
