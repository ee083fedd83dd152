//! Message repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{error::AppResult, models::Message};

/// One conversation partner with the latest exchanged message
#[derive(Debug, sqlx::FromRow)]
pub struct ConversationRow {
    pub partner_id: i64,
    pub partner_username: String,
    pub partner_full_name: String,
    pub partner_avatar: Option<String>,
    pub last_content: String,
    pub last_sender_id: i64,
    pub last_created_at: DateTime<Utc>,
    pub unread_count: i64,
}

/// Repository for direct-message database operations
pub struct MessageRepository;

impl MessageRepository {
    /// Persist a message
    pub async fn create(
        pool: &PgPool,
        sender_id: i64,
        receiver_id: i64,
        content: &str,
    ) -> AppResult<Message> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (sender_id, receiver_id, content)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(sender_id)
        .bind(receiver_id)
        .bind(content)
        .fetch_one(pool)
        .await?;

        Ok(message)
    }

    /// Full history between two users, oldest first (storage insertion order)
    pub async fn list_between(
        pool: &PgPool,
        user_a: i64,
        user_b: i64,
    ) -> AppResult<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE (sender_id = $1 AND receiver_id = $2)
               OR (sender_id = $2 AND receiver_id = $1)
            ORDER BY id
            "#,
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_all(pool)
        .await?;

        Ok(messages)
    }

    /// Mark everything the partner sent to this user as read
    pub async fn mark_read_from(pool: &PgPool, receiver_id: i64, sender_id: i64) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE messages SET read = TRUE
            WHERE receiver_id = $1 AND sender_id = $2 AND read = FALSE
            "#,
        )
        .bind(receiver_id)
        .bind(sender_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Conversation partners of a user with last message and unread count,
    /// most recent conversation first
    pub async fn list_conversations(
        pool: &PgPool,
        user_id: i64,
    ) -> AppResult<Vec<ConversationRow>> {
        let conversations = sqlx::query_as::<_, ConversationRow>(
            r#"
            SELECT * FROM (
                SELECT DISTINCT ON (partner_id)
                    partner_id,
                    u.username AS partner_username,
                    u.full_name AS partner_full_name,
                    u.avatar AS partner_avatar,
                    m.content AS last_content,
                    m.sender_id AS last_sender_id,
                    m.created_at AS last_created_at,
                    (
                        SELECT COUNT(*) FROM messages
                        WHERE receiver_id = $1 AND sender_id = partner_id AND read = FALSE
                    ) AS unread_count
                FROM (
                    SELECT *,
                        CASE WHEN sender_id = $1 THEN receiver_id ELSE sender_id END AS partner_id
                    FROM messages
                    WHERE sender_id = $1 OR receiver_id = $1
                ) m
                JOIN users u ON u.id = m.partner_id
                ORDER BY partner_id, m.id DESC
            ) conv
            ORDER BY last_created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(conversations)
    }
}
