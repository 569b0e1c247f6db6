use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key/value configuration entry under `/system-settings`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemSetting {
    pub key: String,
    pub value: Value,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_sensitive: bool,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `PUT /system-settings/{key}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemSettingUpdate {
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
