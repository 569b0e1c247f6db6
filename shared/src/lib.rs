//! # Shared Data Transfer Objects Library
//!
//! Wire-level types exchanged between the scholarship client and the
//! scholarship backend REST API (`/api/v1`). All DTOs use JSON serialization
//! via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The uniform response envelope and pagination
//!   - **[`dto::auth`]**: Login, token and current-user DTOs
//!   - **[`dto::scholarship`]**, **[`dto::application`]**: Core domain records
//!   - **[`dto::user`]**, **[`dto::admin`]**, **[`dto::notification`]**,
//!     **[`dto::quota`]**, **[`dto::settings`]**, **[`dto::profile`]**,
//!     **[`dto::relationship`]**, **[`dto::fields`]**: Remaining resource families
//! - **[`utils`]**: Timestamp parsing shared by the DTOs
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in both Rust and JSON
//! - Optional fields are omitted from requests when `None`
//! - Response records are lenient: fields the backend may omit carry
//!   `#[serde(default)]` so partial payloads still decode
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::envelope::ApiResponse;
//! use shared::dto::scholarship::Scholarship;
//!
//! let body = r#"{"success":true,"message":"ok","data":{"id":3,"name":"Merit"}}"#;
//! let response: ApiResponse<Scholarship> = serde_json::from_str(body).unwrap();
//! assert_eq!(response.data.unwrap().name, "Merit");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: everything in a DTO library is public API
pub use dto::*;
pub use utils::*;
