//! Host-upgrade request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::constants::upgrade_status;

/// A user's application to become a facility host
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UpgradeRequest {
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
}

impl UpgradeRequest {
    /// Whether this request can still be approved or rejected
    pub fn is_pending(&self) -> bool {
        self.status == upgrade_status::PENDING
    }
}
