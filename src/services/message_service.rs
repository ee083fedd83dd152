//! Direct-message service

use sqlx::PgPool;

use crate::{
    db::repositories::{MessageRepository, UserRepository, message_repo::ConversationRow},
    error::{AppError, AppResult},
    models::Message,
    services::chat_registry::{ChatEvent, ChatRegistry},
};

/// Direct-message service
pub struct MessageService;

impl MessageService {
    /// Persist a message and relay it to the receiver's live connection.
    ///
    /// Returns the stored message and whether it reached an open socket. An
    /// offline receiver still gets the message through history; there is no
    /// offline queue or delivery acknowledgement.
    pub async fn send(
        pool: &PgPool,
        registry: &ChatRegistry,
        sender_id: i64,
        receiver_id: i64,
        content: &str,
    ) -> AppResult<(Message, bool)> {
        if !UserRepository::exists(pool, receiver_id).await? {
            return Err(AppError::NotFound("Receiver not found".to_string()));
        }

        let message = MessageRepository::create(pool, sender_id, receiver_id, content).await?;

        let delivered = receiver_id != sender_id
            && registry.send_to(
                receiver_id,
                ChatEvent::Message {
                    id: message.id,
                    sender_id: message.sender_id,
                    receiver_id: message.receiver_id,
                    content: message.content.clone(),
                    created_at: message.created_at,
                },
            );

        Ok((message, delivered))
    }

    /// History between the caller and a partner; the partner's messages to
    /// the caller are marked read
    pub async fn history(pool: &PgPool, user_id: i64, partner_id: i64) -> AppResult<Vec<Message>> {
        if !UserRepository::exists(pool, partner_id).await? {
            return Err(AppError::NotFound("Receiver not found".to_string()));
        }

        let messages = MessageRepository::list_between(pool, user_id, partner_id).await?;
        MessageRepository::mark_read_from(pool, user_id, partner_id).await?;

        Ok(messages)
    }

    /// The caller's conversations, most recent first
    pub async fn conversations(pool: &PgPool, user_id: i64) -> AppResult<Vec<ConversationRow>> {
        MessageRepository::list_conversations(pool, user_id).await
    }
}
