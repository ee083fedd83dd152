//! Host-upgrade request service

use sqlx::PgPool;

use crate::{
    constants::{notification_types, priorities},
    db::repositories::{
        UpgradeRequestRepository, UserRepository, upgrade_repo::UpgradeRequestWithUser,
    },
    error::{AppError, AppResult},
    models::UpgradeRequest,
    services::NotificationService,
};

/// Text fields of an upgrade application, parsed from the multipart form
#[derive(Debug, Default)]
pub struct UpgradeApplication {
    pub reason: Option<String>,
    pub experience: Option<String>,
    pub business_name: Option<String>,
    pub business_address: Option<String>,
    pub business_license: Option<String>,
    pub bank_id: Option<String>,
    pub bank_name: Option<String>,
    pub cccd_front_image: Option<String>,
    pub cccd_back_image: Option<String>,
    pub business_license_image: Option<String>,
    pub facility_images: Vec<String>,
}

/// Host-upgrade request service
pub struct UpgradeService;

impl UpgradeService {
    /// Submit an upgrade application; a user may have one pending request
    pub async fn submit(
        pool: &PgPool,
        user_id: i64,
        application: UpgradeApplication,
    ) -> AppResult<UpgradeRequest> {
        if UpgradeRequestRepository::has_pending(pool, user_id).await? {
            return Err(AppError::InvalidInput(
                "Bạn đã có yêu cầu nâng cấp đang chờ duyệt".to_string(),
            ));
        }

        UpgradeRequestRepository::create(
            pool,
            user_id,
            application.reason.as_deref(),
            application.experience.as_deref(),
            application.business_name.as_deref(),
            application.business_address.as_deref(),
            application.business_license.as_deref(),
            application.bank_id.as_deref(),
            application.bank_name.as_deref(),
            application.cccd_front_image.as_deref(),
            application.cccd_back_image.as_deref(),
            application.business_license_image.as_deref(),
            &application.facility_images,
        )
        .await
    }

    /// All requests with applicant details, for the admin listing
    pub async fn list_with_users(pool: &PgPool) -> AppResult<Vec<UpgradeRequestWithUser>> {
        UpgradeRequestRepository::list_with_users(pool).await
    }

    /// Approve a pending request: the applicant becomes a host
    pub async fn approve(pool: &PgPool, request_id: i64) -> AppResult<UpgradeRequest> {
        let request = UpgradeRequestRepository::approve(pool, request_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Request không tồn tại hoặc đã xử lý".to_string())
            })?;

        let user = UserRepository::find_by_id(pool, request.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User không tồn tại".to_string()))?;

        NotificationService::notify(
            pool,
            user.id,
            notification_types::SYSTEM,
            "Kết quả đơn nâng cấp role",
            &format!("Tài khoản {} được duyệt thành chủ sân", user.username),
            priorities::HIGH,
            serde_json::json!({}),
        )
        .await?;

        Ok(request)
    }

    /// Reject a pending request with a reason
    pub async fn reject(pool: &PgPool, request_id: i64, reason: &str) -> AppResult<UpgradeRequest> {
        let request = UpgradeRequestRepository::reject(pool, request_id, reason)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Request không tồn tại hoặc đã xử lý".to_string())
            })?;

        let user = UserRepository::find_by_id(pool, request.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User không tồn tại".to_string()))?;

        NotificationService::notify(
            pool,
            user.id,
            notification_types::SYSTEM,
            "Kết quả đơn nâng cấp role",
            &format!(
                "Yêu cầu nâng cấp tài khoản {} bị từ chối. Lý do: {}",
                user.username, reason
            ),
            priorities::HIGH,
            serde_json::json!({}),
        )
        .await?;

        Ok(request)
    }
}
