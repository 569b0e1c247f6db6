//! # Response Envelope
//!
//! Every call against the backend resolves to one [`ApiResponse`], whatever
//! shape the backend actually produced (bare object, bare array, paginated
//! list or an already-enveloped body).

use serde::{Deserialize, Serialize};

/// Message used when the backend supplies none.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Request completed successfully";

/// Uniform `{success, message, data, errors, trace_id}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data` and the default message.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            data: Some(data),
            errors: None,
            trace_id: None,
        }
    }

    /// Replace the payload while keeping status, message, errors and trace id.
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
            errors: self.errors,
            trace_id: self.trace_id,
        }
    }

    /// Same envelope with the payload dropped.
    pub fn without_data<U>(self) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            message: self.message,
            data: None,
            errors: self.errors,
            trace_id: self.trace_id,
        }
    }
}

/// Page of items as returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
    pub pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

/// Page/size pair accepted by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, size: 20 }
    }
}
