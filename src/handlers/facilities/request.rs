//! Facility request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_FACILITY_NAME_LENGTH;

/// Facility creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFacilityRequest {
    #[validate(length(min = 1, max = MAX_FACILITY_NAME_LENGTH))]
    pub name: String,

    /// Sports playable at this facility
    #[validate(length(min = 1))]
    pub sport_type: Vec<String>,

    pub description: String,

    #[validate(range(min = 0.0))]
    pub price_per_hour: f64,

    pub location: Option<String>,

    pub amenities: Option<Vec<String>>,

    pub opening_hours: Option<String>,

    /// Court layout per sport, e.g. `[{"sport_type": "badminton", "count": 6}]`
    pub court_layout: Option<serde_json::Value>,

    pub image_url: Option<String>,

    pub is_active: Option<bool>,
}

/// Facility update request; absent fields keep their current value
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFacilityRequest {
    #[validate(length(min = 1, max = MAX_FACILITY_NAME_LENGTH))]
    pub name: Option<String>,

    pub sport_type: Option<Vec<String>>,

    pub description: Option<String>,

    #[validate(range(min = 0.0))]
    pub price_per_hour: Option<f64>,

    pub location: Option<String>,

    pub amenities: Option<Vec<String>>,

    pub opening_hours: Option<String>,

    pub court_layout: Option<serde_json::Value>,

    pub image_url: Option<String>,

    pub is_active: Option<bool>,
}

/// Active-status toggle request
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub is_active: bool,
}
