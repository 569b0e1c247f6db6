use serde::{Deserialize, Serialize};

/// Personal profile of the signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    pub user_id: i64,
    #[serde(default)]
    pub advisor_name: Option<String>,
    #[serde(default)]
    pub advisor_email: Option<String>,
    #[serde(default)]
    pub advisor_nycu_id: Option<String>,
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub bank_document_photo_url: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `PUT /user-profiles/me`; only present fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisor_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisor_nycu_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
}
