//! # Application Form Configuration
//!
//! Per-scholarship-type field and document definitions that drive the
//! dynamic application form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One configurable form field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationField {
    pub id: i64,
    pub scholarship_type: String,
    pub field_name: String,
    pub field_label: String,
    #[serde(default)]
    pub field_label_en: Option<String>,
    pub field_type: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub options: Option<Value>,
    #[serde(default)]
    pub validation_rules: Option<Value>,
    #[serde(default)]
    pub help_text: Option<String>,
}

/// Body of `PUT /application-fields/fields/{id}`; only present fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApplicationFieldUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_label_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

/// Required supporting document for a scholarship type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationDocumentConfig {
    pub id: i64,
    pub scholarship_type: String,
    pub document_name: String,
    #[serde(default)]
    pub document_name_en: Option<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub accepted_file_types: Vec<String>,
    #[serde(default)]
    pub max_file_size: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

/// Fields and documents of one scholarship type's form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationFormConfig {
    #[serde(default)]
    pub fields: Vec<ApplicationField>,
    #[serde(default)]
    pub documents: Vec<ApplicationDocumentConfig>,
}
