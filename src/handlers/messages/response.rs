//! Message response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{db::repositories::message_repo::ConversationRow, models::Message};

/// A stored direct message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            sender_id: m.sender_id,
            receiver_id: m.receiver_id,
            content: m.content,
            read: m.read,
            created_at: m.created_at,
        }
    }
}

/// Send result: the stored message plus whether it reached a live socket
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    #[serde(flatten)]
    pub message: MessageResponse,
    pub delivered: bool,
}

/// One conversation in the caller's inbox
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub partner_id: i64,
    pub partner_username: String,
    pub partner_full_name: String,
    pub partner_avatar: Option<String>,
    pub last_content: String,
    pub last_sender_id: i64,
    pub last_created_at: DateTime<Utc>,
    pub unread_count: i64,
}

impl From<ConversationRow> for ConversationResponse {
    fn from(c: ConversationRow) -> Self {
        Self {
            partner_id: c.partner_id,
            partner_username: c.partner_username,
            partner_full_name: c.partner_full_name,
            partner_avatar: c.partner_avatar,
            last_content: c.last_content,
            last_sender_id: c.last_sender_id,
            last_created_at: c.last_created_at,
            unread_count: c.unread_count,
        }
    }
}
