//! Admin handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::{AuthenticatedUser, require_admin},
    services::{AdminService, AuthService, UpgradeService},
    state::AppState,
};

use super::{
    request::RejectRequestBody,
    response::{
        AdminStatsResponse, ApproveResponse, RejectResponse, ReviewedRequest, ReviewedUser,
        UpgradeRequestResponse,
    },
};

/// All upgrade requests with their applicants
pub async fn list_upgrade_requests(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<UpgradeRequestResponse>>> {
    require_admin(&auth_user)?;

    let requests = UpgradeService::list_with_users(state.db()).await?;
    Ok(Json(
        requests.into_iter().map(UpgradeRequestResponse::from).collect(),
    ))
}

/// Approve a pending upgrade request
pub async fn approve_upgrade_request(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(request_id): Path<i64>,
) -> AppResult<Json<ApproveResponse>> {
    require_admin(&auth_user)?;

    let request = UpgradeService::approve(state.db(), request_id).await?;

    let user = AuthService::get_user_by_id(state.db(), request.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User không tồn tại".to_string()))?;

    Ok(Json(ApproveResponse {
        detail: "Đã phê duyệt".to_string(),
        user: ReviewedUser {
            id: user.id,
            username: user.username,
            role: user.role,
        },
        request: ReviewedRequest {
            id: request.id,
            status: request.status,
            reason: None,
        },
    }))
}

/// Reject a pending upgrade request with a reason
pub async fn reject_upgrade_request(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(request_id): Path<i64>,
    Json(payload): Json<RejectRequestBody>,
) -> AppResult<Json<RejectResponse>> {
    require_admin(&auth_user)?;
    payload.validate()?;

    let request = UpgradeService::reject(state.db(), request_id, &payload.reason).await?;

    Ok(Json(RejectResponse {
        detail: "Đã từ chối".to_string(),
        request: ReviewedRequest {
            id: request.id,
            status: request.status,
            reason: request.rejection_reason,
        },
    }))
}

/// Platform statistics
pub async fn get_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<AdminStatsResponse>> {
    require_admin(&auth_user)?;

    let stats = AdminService::stats(state.db()).await?;
    Ok(Json(stats))
}
