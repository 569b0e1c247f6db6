use serde::{Deserialize, Serialize};

use super::auth::UserRole;

/// Account record as managed under `/users`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub nycu_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub dept_code: Option<String>,
    #[serde(default)]
    pub dept_name: Option<String>,
    #[serde(default)]
    pub college_code: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

/// Body of `POST /users`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserCreateRequest {
    pub nycu_id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_code: Option<String>,
}

/// Body of `PUT /users/{id}`; only present fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Filters accepted by `GET /users`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub role: Option<UserRole>,
    pub search: Option<String>,
}

/// Aggregate counts from `GET /users/stats`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserStats {
    pub total_users: u64,
    #[serde(default)]
    pub role_distribution: std::collections::BTreeMap<String, u64>,
    #[serde(default)]
    pub active_users: Option<u64>,
    #[serde(default)]
    pub recent_registrations: Option<u64>,
}
