//! Notification response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Notification;

/// A notification as served to its owner
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub priority: String,
    pub read: bool,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            kind: n.kind,
            title: n.title,
            message: n.message,
            priority: n.priority,
            read: n.read,
            data: n.data,
            created_at: n.created_at,
        }
    }
}

/// Mark-read result
#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub id: i64,
    pub read: bool,
}

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
