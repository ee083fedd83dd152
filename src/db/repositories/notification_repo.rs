//! Notification repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Notification};

/// Repository for notification database operations
pub struct NotificationRepository;

impl NotificationRepository {
    /// Create a notification
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        kind: &str,
        title: &str,
        message: &str,
        priority: &str,
        data: &serde_json::Value,
    ) -> AppResult<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (user_id, type, title, message, priority, data)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(kind)
        .bind(title)
        .bind(message)
        .bind(priority)
        .bind(data)
        .fetch_one(pool)
        .await?;

        Ok(notification)
    }

    /// List a user's notifications: unread first, then priority
    /// (high > medium > low), then newest
    pub async fn list_by_user(pool: &PgPool, user_id: i64) -> AppResult<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE user_id = $1
            ORDER BY
                read ASC,
                CASE priority
                    WHEN 'high' THEN 0
                    WHEN 'medium' THEN 1
                    WHEN 'low' THEN 2
                    ELSE 3
                END,
                created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(notifications)
    }

    /// Mark one notification read, returning (id, read) when the row exists.
    /// Repeating the call leaves read = TRUE and returns the same row.
    pub async fn mark_read(pool: &PgPool, id: i64) -> AppResult<Option<(i64, bool)>> {
        let row: Option<(i64, bool)> = sqlx::query_as(
            r#"UPDATE notifications SET read = TRUE WHERE id = $1 RETURNING id, read"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    /// Mark all of a user's notifications read, returning how many changed
    pub async fn mark_all_read(pool: &PgPool, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query(
            r#"UPDATE notifications SET read = TRUE WHERE user_id = $1 AND read = FALSE"#,
        )
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a notification owned by the user, returning whether it existed
    pub async fn delete(pool: &PgPool, id: i64, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM notifications WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
