//! # Services Module
//!
//! External service integrations. Currently the scholarship backend API.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  CLI / embedding application │
//! └──────────────┬───────────────┘
//!                │ typed calls
//!                ▼
//! ┌──────────────────────────────┐
//! │  api::{auth, applications,…} │  resource modules
//! ├──────────────────────────────┤
//! │  ApiClient                   │  headers, status handling,
//! │                              │  envelope normalization
//! ├──────────────────────────────┤
//! │  HttpTransport (reqwest)     │
//! └──────────────┬───────────────┘
//!                │ HTTP/JSON
//!                ▼
//!        scholarship backend
//! ```

pub mod api;

pub use api::ApiClient;
