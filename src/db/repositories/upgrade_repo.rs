//! Host-upgrade request repository

use sqlx::{PgPool, Postgres, Transaction};

use crate::{
    constants::{roles, upgrade_status},
    error::AppResult,
    models::UpgradeRequest,
};

/// Upgrade request joined with applicant details, for the admin listing
#[derive(Debug, sqlx::FromRow)]
pub struct UpgradeRequestWithUser {
    #[sqlx(flatten)]
    pub request: UpgradeRequest,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
}

/// Repository for upgrade-request database operations
pub struct UpgradeRequestRepository;

impl UpgradeRequestRepository {
    /// Insert a pending request; the partial unique index rejects a second
    /// pending request for the same user
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        reason: Option<&str>,
        experience: Option<&str>,
        business_name: Option<&str>,
        business_address: Option<&str>,
        business_license: Option<&str>,
        bank_id: Option<&str>,
        bank_name: Option<&str>,
        cccd_front_image: Option<&str>,
        cccd_back_image: Option<&str>,
        business_license_image: Option<&str>,
        facility_images: &[String],
    ) -> AppResult<UpgradeRequest> {
        let request = sqlx::query_as::<_, UpgradeRequest>(
            r#"
            INSERT INTO upgrade_requests
                (user_id, reason, experience, business_name, business_address,
                 business_license, bank_id, bank_name, cccd_front_image,
                 cccd_back_image, business_license_image, facility_images)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(reason)
        .bind(experience)
        .bind(business_name)
        .bind(business_address)
        .bind(business_license)
        .bind(bank_id)
        .bind(bank_name)
        .bind(cccd_front_image)
        .bind(cccd_back_image)
        .bind(business_license_image)
        .bind(facility_images)
        .fetch_one(pool)
        .await?;

        Ok(request)
    }

    /// Find a request by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<UpgradeRequest>> {
        let request =
            sqlx::query_as::<_, UpgradeRequest>(r#"SELECT * FROM upgrade_requests WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(request)
    }

    /// Whether the user already has a pending request
    pub async fn has_pending(pool: &PgPool, user_id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM upgrade_requests WHERE user_id = $1 AND status = 'pending'
            )
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// All requests joined with their applicants, newest first
    pub async fn list_with_users(pool: &PgPool) -> AppResult<Vec<UpgradeRequestWithUser>> {
        let requests = sqlx::query_as::<_, UpgradeRequestWithUser>(
            r#"
            SELECT r.*, u.username, u.full_name, u.email, u.phone, u.role
            FROM upgrade_requests r
            JOIN users u ON u.id = r.user_id
            ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(requests)
    }

    /// Approve a pending request: promote the user to host and flip the
    /// request status in one transaction
    pub async fn approve(pool: &PgPool, id: i64) -> AppResult<Option<UpgradeRequest>> {
        let mut tx: Transaction<'_, Postgres> = pool.begin().await?;

        let request = sqlx::query_as::<_, UpgradeRequest>(
            r#"
            UPDATE upgrade_requests
            SET status = $2, updated_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(upgrade_status::APPROVED)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(request) = request else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query(r#"UPDATE users SET role = $2, updated_at = NOW() WHERE id = $1"#)
            .bind(request.user_id)
            .bind(roles::HOST)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(request))
    }

    /// Reject a pending request with a reason
    pub async fn reject(
        pool: &PgPool,
        id: i64,
        rejection_reason: &str,
    ) -> AppResult<Option<UpgradeRequest>> {
        let request = sqlx::query_as::<_, UpgradeRequest>(
            r#"
            UPDATE upgrade_requests
            SET status = $2, rejection_reason = $3, updated_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(upgrade_status::REJECTED)
        .bind(rejection_reason)
        .fetch_optional(pool)
        .await?;

        Ok(request)
    }
}
