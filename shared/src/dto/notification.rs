use serde::{Deserialize, Serialize};

/// In-app notification addressed to the current user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub notification_type: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub related_resource_type: Option<String>,
    #[serde(default)]
    pub related_resource_id: Option<i64>,
    #[serde(default)]
    pub action_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload of `GET /notifications/unread-count`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UnreadCount {
    Object { count: u64 },
    Bare(u64),
}

impl UnreadCount {
    pub fn value(self) -> u64 {
        match self {
            UnreadCount::Object { count } | UnreadCount::Bare(count) => count,
        }
    }
}
