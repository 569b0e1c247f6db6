//! # Backend API Client Module
//!
//! HTTP client for the scholarship backend REST API (`/api/v1`).
//! Every call resolves to a normalized [`shared::ApiResponse`] or an
//! [`ApiError`](crate::core::error::ApiError).
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs                - Module exports and documentation
//! ├── client.rs             - ApiClient request executor
//! ├── request.rs            - Request options, query params, multipart forms
//! ├── response.rs           - Body reading and error message extraction
//! ├── normalize.rs          - Response shape detection and envelope decoding
//! ├── token.rs              - Bearer token store and file persistence
//! ├── events.rs             - Session expired / forbidden notifications
//! ├── transport.rs          - reqwest transport
//! ├── auth.rs               - Login, refresh, current user
//! ├── scholarships.rs       - Scholarship catalogue
//! ├── applications.rs       - Applications, documents, reviews
//! ├── admin.rs              - Dashboard, application oversight, announcements
//! ├── users.rs              - User management
//! ├── notifications.rs      - Notifications
//! ├── quota.rs              - Matrix quotas
//! ├── system_settings.rs    - System settings
//! ├── user_profiles.rs      - Profile and bank document
//! ├── professor_student.rs  - Professor-student relationships
//! └── application_fields.rs - Form field and document configuration
//! ```
//!
//! Resource modules share function names (`get_all`, `get_by_id`), so they
//! are used through their module path: `applications::get_by_id(&client, 7)`.

pub mod admin;
pub mod application_fields;
pub mod applications;
pub mod auth;
pub mod client;
pub mod events;
pub mod normalize;
pub mod notifications;
pub mod professor_student;
pub mod quota;
pub mod request;
pub mod response;
pub mod scholarships;
pub mod system_settings;
pub mod token;
pub mod transport;
pub mod user_profiles;
pub mod users;

#[cfg(test)]
mod tests;

pub use applications::FileUpload;
pub use client::{ApiClient, API_PREFIX};
pub use events::{SessionEvent, SessionEvents};
pub use normalize::ResponseShape;
pub use request::{HttpRequest, HttpResponse, MultipartForm, MultipartPart, QueryParams, RequestBody, RequestOptions, Validation};
pub use token::{FileTokenStorage, TokenStore};
pub use transport::ReqwestTransport;
