use serde::{Deserialize, Serialize};

use crate::RecordId;

/// A notification shown in the bell menu and on the notifications page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<RecordId>,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, alias = "isRead")]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Per-user delivery preferences of the notification API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    #[serde(default = "default_true")]
    pub email: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default = "default_true")]
    pub new_offers: bool,
    #[serde(default = "default_true")]
    pub application_updates: bool,
    #[serde(default)]
    pub newsletter: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            new_offers: true,
            application_updates: true,
            newsletter: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Body of `GET /api/notifications/unread-count`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnreadCount {
    #[serde(alias = "unreadCount", alias = "unread_count")]
    pub count: u64,
}

/// Count unread entries in an already-fetched list.
pub fn unread_total(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
