//! Facility service

use sqlx::PgPool;

use crate::{
    db::repositories::{FacilityRepository, facility_repo::SportCount},
    error::{AppError, AppResult},
    handlers::facilities::request::{CreateFacilityRequest, UpdateFacilityRequest},
    models::{Facility, User, UserFavorite},
    utils::validation::sanitize_string,
};

/// Facility service for business logic
pub struct FacilityService;

impl FacilityService {
    /// List all active facilities
    pub async fn list_active(pool: &PgPool) -> AppResult<Vec<Facility>> {
        FacilityRepository::list_active(pool).await
    }

    /// Get an active facility
    pub async fn get_active(pool: &PgPool, id: i64) -> AppResult<Facility> {
        FacilityRepository::find_active_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Facility not found".to_string()))
    }

    /// Create a facility; only hosts and admins may create listings
    pub async fn create(
        pool: &PgPool,
        owner: &User,
        payload: CreateFacilityRequest,
    ) -> AppResult<Facility> {
        if !owner.can_manage_facilities() {
            return Err(AppError::Forbidden(
                "Chỉ chủ sân hoặc admin mới có thể tạo sân mới".to_string(),
            ));
        }

        let name = sanitize_string(&payload.name);
        if name.is_empty() {
            return Err(AppError::Validation("Facility name cannot be empty".to_string()));
        }

        FacilityRepository::create(
            pool,
            owner.id,
            &name,
            &payload.sport_type,
            payload.court_layout.as_ref(),
            &payload.description,
            payload.price_per_hour,
            payload.image_url.as_deref(),
            payload.location.as_deref(),
            &payload.amenities.unwrap_or_default(),
            payload.opening_hours.as_deref(),
            payload.is_active.unwrap_or(true),
        )
        .await
    }

    /// Update a facility owned by the requester (admins may update any)
    pub async fn update(
        pool: &PgPool,
        id: i64,
        requester_id: i64,
        requester_role: &str,
        payload: UpdateFacilityRequest,
    ) -> AppResult<Facility> {
        let facility = FacilityRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy sân".to_string()))?;

        if !facility.is_managed_by(requester_id, requester_role) {
            return Err(AppError::Forbidden(
                "Bạn không có quyền sửa sân này".to_string(),
            ));
        }

        FacilityRepository::update(
            pool,
            id,
            payload.name.as_deref(),
            payload.sport_type.as_deref(),
            payload.court_layout.as_ref(),
            payload.description.as_deref(),
            payload.price_per_hour,
            payload.image_url.as_deref(),
            payload.location.as_deref(),
            payload.amenities.as_deref(),
            payload.opening_hours.as_deref(),
            payload.is_active,
        )
        .await
    }

    /// Delete a facility owned by the requester (admins may delete any)
    pub async fn delete(
        pool: &PgPool,
        id: i64,
        requester_id: i64,
        requester_role: &str,
    ) -> AppResult<()> {
        let facility = FacilityRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy sân".to_string()))?;

        if !facility.is_managed_by(requester_id, requester_role) {
            return Err(AppError::Forbidden(
                "Bạn không có quyền xóa sân này".to_string(),
            ));
        }

        FacilityRepository::delete(pool, id).await
    }

    /// Toggle a facility's active flag
    pub async fn set_status(
        pool: &PgPool,
        id: i64,
        requester_id: i64,
        requester_role: &str,
        is_active: bool,
    ) -> AppResult<()> {
        let facility = FacilityRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy sân".to_string()))?;

        if !facility.is_managed_by(requester_id, requester_role) {
            return Err(AppError::Forbidden(
                "Bạn không có quyền thay đổi trạng thái sân này".to_string(),
            ));
        }

        FacilityRepository::set_active(pool, id, is_active).await
    }

    /// Count of active facilities
    pub async fn count_active(pool: &PgPool) -> AppResult<i64> {
        FacilityRepository::count_active(pool).await
    }

    /// Active facility count per sport type
    pub async fn popular_sports(pool: &PgPool) -> AppResult<Vec<SportCount>> {
        FacilityRepository::popular_sports(pool).await
    }

    /// Favorite a facility; the unique pair constraint backs the pre-check
    pub async fn add_favorite(
        pool: &PgPool,
        user_id: i64,
        facility_id: i64,
    ) -> AppResult<UserFavorite> {
        if FacilityRepository::find_by_id(pool, facility_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Sân không tồn tại".to_string()));
        }

        match FacilityRepository::add_favorite(pool, user_id, facility_id).await {
            Err(AppError::AlreadyExists(_)) => Err(AppError::Conflict(
                "Bạn đã thích sân này rồi".to_string(),
            )),
            other => other,
        }
    }

    /// Remove a favorite
    pub async fn remove_favorite(pool: &PgPool, user_id: i64, facility_id: i64) -> AppResult<()> {
        if !FacilityRepository::remove_favorite(pool, user_id, facility_id).await? {
            return Err(AppError::NotFound("Bạn chưa thích sân này".to_string()));
        }
        Ok(())
    }

    /// Facility ids the user has favorited
    pub async fn list_favorite_ids(pool: &PgPool, user_id: i64) -> AppResult<Vec<i64>> {
        FacilityRepository::list_favorite_ids(pool, user_id).await
    }
}
