//! Admin request DTOs

use serde::Deserialize;
use validator::Validate;

/// Rejection body for an upgrade request
#[derive(Debug, Deserialize, Validate)]
pub struct RejectRequestBody {
    #[validate(length(min = 1))]
    pub reason: String,
}
