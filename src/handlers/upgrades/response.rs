//! Host-upgrade response DTOs

use serde::Serialize;

/// Submission acknowledgement
#[derive(Debug, Serialize)]
pub struct UpgradeSubmitResponse {
    pub message: String,
    pub request_id: i64,
    pub status: String,
}
