//! Notification handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::NotificationService,
    state::AppState,
};

use super::response::{MarkReadResponse, MessageResponse, NotificationResponse};

/// List the caller's notifications (unread first, then priority, then newest)
pub async fn list_notifications(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<NotificationResponse>>> {
    let notifications = NotificationService::list(state.db(), auth_user.id).await?;
    Ok(Json(
        notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect(),
    ))
}

/// Mark one notification read (idempotent)
pub async fn mark_as_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MarkReadResponse>> {
    let (id, read) = NotificationService::mark_read(state.db(), id).await?;
    Ok(Json(MarkReadResponse { id, read }))
}

/// Mark all of the caller's notifications read
pub async fn mark_all_as_read(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<MessageResponse>> {
    let count = NotificationService::mark_all_read(state.db(), auth_user.id).await?;
    Ok(Json(MessageResponse {
        message: format!("{} notifications marked as read", count),
    }))
}

/// Delete one of the caller's notifications
pub async fn delete_notification(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    NotificationService::delete(state.db(), id, auth_user.id).await?;
    Ok(Json(MessageResponse {
        message: format!("Notification {} deleted successfully", id),
    }))
}
