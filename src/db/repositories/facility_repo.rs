//! Facility repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Facility, UserFavorite},
};

/// Per-sport active facility count, used by the popular-sports endpoint
#[derive(Debug, sqlx::FromRow)]
pub struct SportCount {
    pub sport_type: String,
    pub courts: i64,
}

/// Repository for facility database operations
pub struct FacilityRepository;

impl FacilityRepository {
    /// Create a new facility
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        owner_id: i64,
        name: &str,
        sport_types: &[String],
        court_layout: Option<&serde_json::Value>,
        description: &str,
        price_per_hour: f64,
        image_url: Option<&str>,
        location: Option<&str>,
        amenities: &[String],
        opening_hours: Option<&str>,
        is_active: bool,
    ) -> AppResult<Facility> {
        let facility = sqlx::query_as::<_, Facility>(
            r#"
            INSERT INTO facilities
                (owner_id, name, sport_types, court_layout, description, price_per_hour,
                 image_url, location, amenities, opening_hours, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(name)
        .bind(sport_types)
        .bind(court_layout)
        .bind(description)
        .bind(price_per_hour)
        .bind(image_url)
        .bind(location)
        .bind(amenities)
        .bind(opening_hours)
        .bind(is_active)
        .fetch_one(pool)
        .await?;

        Ok(facility)
    }

    /// Find facility by ID (active or not)
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Facility>> {
        let facility = sqlx::query_as::<_, Facility>(r#"SELECT * FROM facilities WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(facility)
    }

    /// Find an active facility by ID
    pub async fn find_active_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Facility>> {
        let facility = sqlx::query_as::<_, Facility>(
            r#"SELECT * FROM facilities WHERE id = $1 AND is_active = TRUE"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(facility)
    }

    /// List all active facilities
    pub async fn list_active(pool: &PgPool) -> AppResult<Vec<Facility>> {
        let facilities = sqlx::query_as::<_, Facility>(
            r#"SELECT * FROM facilities WHERE is_active = TRUE ORDER BY created_at DESC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(facilities)
    }

    /// Update facility fields; NULL arguments keep the current value
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: i64,
        name: Option<&str>,
        sport_types: Option<&[String]>,
        court_layout: Option<&serde_json::Value>,
        description: Option<&str>,
        price_per_hour: Option<f64>,
        image_url: Option<&str>,
        location: Option<&str>,
        amenities: Option<&[String]>,
        opening_hours: Option<&str>,
        is_active: Option<bool>,
    ) -> AppResult<Facility> {
        let facility = sqlx::query_as::<_, Facility>(
            r#"
            UPDATE facilities
            SET
                name = COALESCE($2, name),
                sport_types = COALESCE($3, sport_types),
                court_layout = COALESCE($4, court_layout),
                description = COALESCE($5, description),
                price_per_hour = COALESCE($6, price_per_hour),
                image_url = COALESCE($7, image_url),
                location = COALESCE($8, location),
                amenities = COALESCE($9, amenities),
                opening_hours = COALESCE($10, opening_hours),
                is_active = COALESCE($11, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(sport_types)
        .bind(court_layout)
        .bind(description)
        .bind(price_per_hour)
        .bind(image_url)
        .bind(location)
        .bind(amenities)
        .bind(opening_hours)
        .bind(is_active)
        .fetch_one(pool)
        .await?;

        Ok(facility)
    }

    /// Set the active flag
    pub async fn set_active(pool: &PgPool, id: i64, is_active: bool) -> AppResult<()> {
        sqlx::query(
            r#"UPDATE facilities SET is_active = $2, updated_at = NOW() WHERE id = $1"#,
        )
        .bind(id)
        .bind(is_active)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Delete a facility
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM facilities WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Count active facilities
    pub async fn count_active(pool: &PgPool) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM facilities WHERE is_active = TRUE"#)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// Count total facilities
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM facilities"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Active facility count per sport type (sport_types is an array column)
    pub async fn popular_sports(pool: &PgPool) -> AppResult<Vec<SportCount>> {
        let counts = sqlx::query_as::<_, SportCount>(
            r#"
            SELECT sport AS sport_type, COUNT(*) AS courts
            FROM facilities, UNNEST(sport_types) AS sport
            WHERE is_active = TRUE
            GROUP BY sport
            ORDER BY courts DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(counts)
    }

    /// Add a favorite; the unique pair constraint rejects duplicates
    pub async fn add_favorite(
        pool: &PgPool,
        user_id: i64,
        facility_id: i64,
    ) -> AppResult<UserFavorite> {
        let favorite = sqlx::query_as::<_, UserFavorite>(
            r#"
            INSERT INTO user_favorites (user_id, facility_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(facility_id)
        .fetch_one(pool)
        .await?;

        Ok(favorite)
    }

    /// Remove a favorite, returning whether a row was deleted
    pub async fn remove_favorite(
        pool: &PgPool,
        user_id: i64,
        facility_id: i64,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"DELETE FROM user_favorites WHERE user_id = $1 AND facility_id = $2"#,
        )
        .bind(user_id)
        .bind(facility_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Facility ids favorited by a user
    pub async fn list_favorite_ids(pool: &PgPool, user_id: i64) -> AppResult<Vec<i64>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            r#"SELECT facility_id FROM user_favorites WHERE user_id = $1 ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(ids)
    }
}
