//! Facility handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::User,
    services::{AuthService, FacilityService},
    state::AppState,
};

use super::{
    request::{CreateFacilityRequest, StatusUpdateRequest, UpdateFacilityRequest},
    response::{
        CountResponse, FacilityResponse, FavoriteResponse, MessageResponse, PopularSportResponse,
        StatusResponse,
    },
};

/// List all active facilities
pub async fn list_facilities(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FacilityResponse>>> {
    let facilities = FacilityService::list_active(state.db()).await?;
    Ok(Json(facilities.into_iter().map(FacilityResponse::from).collect()))
}

/// Get an active facility
pub async fn get_facility(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<FacilityResponse>> {
    let facility = FacilityService::get_active(state.db(), id).await?;
    Ok(Json(FacilityResponse::from(facility)))
}

/// Create a facility (hosts and admins only)
pub async fn create_facility(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateFacilityRequest>,
) -> AppResult<(StatusCode, Json<FacilityResponse>)> {
    payload.validate()?;

    let owner = current_user(&state, &auth_user).await?;
    let facility = FacilityService::create(state.db(), &owner, payload).await?;

    Ok((StatusCode::CREATED, Json(FacilityResponse::from(facility))))
}

/// Update a facility
pub async fn update_facility(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateFacilityRequest>,
) -> AppResult<Json<FacilityResponse>> {
    payload.validate()?;

    let facility =
        FacilityService::update(state.db(), id, auth_user.id, &auth_user.role, payload).await?;

    Ok(Json(FacilityResponse::from(facility)))
}

/// Delete a facility
pub async fn delete_facility(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    FacilityService::delete(state.db(), id, auth_user.id, &auth_user.role).await?;

    Ok(Json(MessageResponse {
        message: "Xóa sân thành công".to_string(),
    }))
}

/// Toggle a facility's active status
pub async fn update_facility_status(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<StatusResponse>> {
    FacilityService::set_status(
        state.db(),
        id,
        auth_user.id,
        &auth_user.role,
        payload.is_active,
    )
    .await?;

    Ok(Json(StatusResponse {
        message: "Cập nhật trạng thái thành công".to_string(),
        is_active: payload.is_active,
    }))
}

/// Count active facilities
pub async fn count_facilities(State(state): State<AppState>) -> AppResult<Json<CountResponse>> {
    let count = FacilityService::count_active(state.db()).await?;
    Ok(Json(CountResponse { count }))
}

/// Active facility counts per sport
pub async fn popular_sports(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PopularSportResponse>>> {
    let counts = FacilityService::popular_sports(state.db()).await?;

    Ok(Json(
        counts
            .into_iter()
            .map(|c| PopularSportResponse {
                sport_type: c.sport_type,
                courts: c.courts,
            })
            .collect(),
    ))
}

/// Favorite a facility
pub async fn add_favorite(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<FavoriteResponse>> {
    let favorite = FacilityService::add_favorite(state.db(), auth_user.id, id).await?;

    Ok(Json(FavoriteResponse {
        message: "Đã thích sân thành công".to_string(),
        favorite_id: favorite.id,
    }))
}

/// Unfavorite a facility
pub async fn remove_favorite(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    FacilityService::remove_favorite(state.db(), auth_user.id, id).await?;

    Ok(Json(MessageResponse {
        message: "Đã bỏ thích sân".to_string(),
    }))
}

/// Load the full user record behind an authenticated request
async fn current_user(state: &AppState, auth_user: &AuthenticatedUser) -> AppResult<User> {
    AuthService::get_user_by_id(state.db(), auth_user.id)
        .await?
        .ok_or_else(|| crate::error::AppError::NotFound("User không tồn tại".to_string()))
}
