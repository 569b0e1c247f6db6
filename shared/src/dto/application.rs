//! # Application DTOs
//!
//! Applications are owned by the backend workflow engine. The client only
//! reads them, submits form data and requests status transitions; it never
//! decides which transition is legal.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Workflow status reported by the backend.
///
/// Statuses this client does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    Withdrawn,
    Returned,
    Cancelled,
    #[serde(untagged)]
    Other(String),
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ApplicationStatus::Draft => "draft",
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Withdrawn => "withdrawn",
            ApplicationStatus::Returned => "returned",
            ApplicationStatus::Cancelled => "cancelled",
            ApplicationStatus::Other(s) => s,
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application record with nested form data, documents and reviews.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub id: i64,
    #[serde(default)]
    pub app_id: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub scholarship_type_id: Option<i64>,
    #[serde(default)]
    pub sub_scholarship_type: Option<String>,
    #[serde(default)]
    pub academic_year: Option<i32>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub form_data: Value,
    #[serde(default)]
    pub documents: Vec<ApplicationDocument>,
    #[serde(default)]
    pub reviews: Vec<ApplicationReview>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub scholarship_name: Option<String>,
    #[serde(default)]
    pub professor_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Application {
    /// Submission time, if the backend reported a parseable one.
    pub fn submitted_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.submitted_at.as_deref().and_then(crate::utils::parse_timestamp)
    }
}

/// Uploaded supporting document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationDocument {
    pub id: i64,
    pub file_type: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// One entry of an application's review history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationReview {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub reviewer_id: Option<i64>,
    #[serde(default)]
    pub reviewer_name: Option<String>,
    #[serde(default)]
    pub reviewer_role: Option<String>,
    pub recommendation: String,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
}

/// Body of `POST /applications`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationCreateRequest {
    pub scholarship_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scholarship_subtype_list: Option<Vec<String>>,
    pub form_data: Value,
    #[serde(default)]
    pub is_draft: bool,
}

/// Body of `PUT /applications/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApplicationUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scholarship_subtype_list: Option<Vec<String>>,
}

/// Body of the status endpoints (`PATCH .../status`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusUpdateRequest {
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

/// Body of `POST /applications/{id}/review`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewSubmitRequest {
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_sub_types: Option<Vec<String>>,
}
