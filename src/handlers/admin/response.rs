//! Admin response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::db::repositories::upgrade_repo::UpgradeRequestWithUser;

/// Platform totals for the admin dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsResponse {
    pub total_revenue: f64,
    pub total_users: i64,
    pub total_facilities: i64,
    pub today_bookings: i64,
}

/// Applicant details nested in an upgrade-request row
#[derive(Debug, Serialize)]
pub struct ApplicantResponse {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
}

/// Upgrade request with its applicant, for the admin listing
#[derive(Debug, Serialize)]
pub struct UpgradeRequestResponse {
    pub id: i64,
    pub user_id: i64,
    pub status: String,
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
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: ApplicantResponse,
}

impl From<UpgradeRequestWithUser> for UpgradeRequestResponse {
    fn from(row: UpgradeRequestWithUser) -> Self {
        let r = row.request;
        Self {
            id: r.id,
            user_id: r.user_id,
            status: r.status,
            reason: r.reason,
            experience: r.experience,
            business_name: r.business_name,
            business_address: r.business_address,
            business_license: r.business_license,
            bank_id: r.bank_id,
            bank_name: r.bank_name,
            cccd_front_image: r.cccd_front_image,
            cccd_back_image: r.cccd_back_image,
            business_license_image: r.business_license_image,
            facility_images: r.facility_images,
            rejection_reason: r.rejection_reason,
            created_at: r.created_at,
            updated_at: r.updated_at,
            user: ApplicantResponse {
                username: row.username,
                full_name: row.full_name,
                email: row.email,
                phone: row.phone,
                role: row.role,
            },
        }
    }
}

/// Brief user state after a review decision
#[derive(Debug, Serialize)]
pub struct ReviewedUser {
    pub id: i64,
    pub username: String,
    pub role: String,
}

/// Brief request state after a review decision
#[derive(Debug, Serialize)]
pub struct ReviewedRequest {
    pub id: i64,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Approval result
#[derive(Debug, Serialize)]
pub struct ApproveResponse {
    pub detail: String,
    pub user: ReviewedUser,
    pub request: ReviewedRequest,
}

/// Rejection result
#[derive(Debug, Serialize)]
pub struct RejectResponse {
    pub detail: String,
    pub request: ReviewedRequest,
}
