//! Notification service

use sqlx::PgPool;

use crate::{
    db::repositories::NotificationRepository,
    error::{AppError, AppResult},
    models::Notification,
};

/// Notification service
pub struct NotificationService;

impl NotificationService {
    /// Create a notification for a user
    pub async fn notify(
        pool: &PgPool,
        user_id: i64,
        kind: &str,
        title: &str,
        message: &str,
        priority: &str,
        data: serde_json::Value,
    ) -> AppResult<Notification> {
        NotificationRepository::create(pool, user_id, kind, title, message, priority, &data).await
    }

    /// A user's notifications, unread first, then priority, then newest
    pub async fn list(pool: &PgPool, user_id: i64) -> AppResult<Vec<Notification>> {
        NotificationRepository::list_by_user(pool, user_id).await
    }

    /// Mark a notification read; repeated calls return the same result
    pub async fn mark_read(pool: &PgPool, id: i64) -> AppResult<(i64, bool)> {
        NotificationRepository::mark_read(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))
    }

    /// Mark all of a user's notifications read, returning the count changed
    pub async fn mark_all_read(pool: &PgPool, user_id: i64) -> AppResult<u64> {
        NotificationRepository::mark_all_read(pool, user_id).await
    }

    /// Delete one of the user's notifications
    pub async fn delete(pool: &PgPool, id: i64, user_id: i64) -> AppResult<()> {
        if !NotificationRepository::delete(pool, id, user_id).await? {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }
        Ok(())
    }
}
