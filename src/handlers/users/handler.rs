//! User handler implementations

use axum::{Json, extract::State};

use crate::{
    error::AppResult,
    middleware::auth::{AuthenticatedUser, require_admin},
    services::{FacilityService, UserService},
    state::AppState,
};

use super::response::UserDirectoryResponse;

/// Full user directory (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<UserDirectoryResponse>>> {
    require_admin(&auth_user)?;

    let users = UserService::list_all(state.db()).await?;
    Ok(Json(users.into_iter().map(UserDirectoryResponse::from).collect()))
}

/// Facility ids the caller has favorited
pub async fn my_favorites(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<i64>>> {
    let ids = FacilityService::list_favorite_ids(state.db(), auth_user.id).await?;
    Ok(Json(ids))
}
