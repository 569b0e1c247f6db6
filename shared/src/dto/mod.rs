//! # Data Transfer Objects (DTOs)
//!
//! Data structures used for communication with the scholarship backend.
//!
//! ## Module Organization
//!
//! - [`envelope`] - `ApiResponse<T>` envelope and `PaginatedResponse<T>`
//! - [`auth`] - Login, token refresh and current-user DTOs
//! - [`scholarship`] - Scholarship catalogue
//! - [`application`] - Applications, documents and reviews
//! - [`user`] - User accounts managed by administrators
//! - [`admin`] - Dashboard statistics and announcements
//! - [`notification`] - In-app notifications
//! - [`quota`] - Matrix quota allocation per period
//! - [`settings`] - System settings key/value records
//! - [`profile`] - Personal user profiles
//! - [`relationship`] - Professor/student advising relationships
//! - [`fields`] - Dynamic application form configuration
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/v1/auth/login
//! Content-Type: application/json
//!
//! { "username": "alice", "password": "secret" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "message": "Login successful",
//!   "data": { "access_token": "eyJhbGciOi...", "token_type": "bearer", "user": { ... } }
//! }
//! ```

pub mod admin;
pub mod application;
pub mod auth;
pub mod envelope;
pub mod fields;
pub mod notification;
pub mod profile;
pub mod quota;
pub mod relationship;
pub mod scholarship;
pub mod settings;
pub mod user;

pub use admin::*;
pub use application::*;
pub use auth::*;
pub use envelope::*;
pub use fields::*;
pub use notification::*;
pub use profile::*;
pub use quota::*;
pub use relationship::*;
pub use scholarship::*;
pub use settings::*;
pub use user::*;
