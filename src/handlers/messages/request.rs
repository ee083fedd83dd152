//! Message request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_MESSAGE_LENGTH;

/// Direct-message send request
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub receiver_id: i64,

    #[validate(length(min = 1, max = MAX_MESSAGE_LENGTH))]
    pub content: String,
}

/// Bearer token carried in the chat socket's query string
#[derive(Debug, Deserialize)]
pub struct ChatTokenQuery {
    pub token: String,
}

/// Inbound chat socket frame
#[derive(Debug, Deserialize)]
pub struct ChatSendFrame {
    pub receiver_id: i64,
    pub content: String,
}
