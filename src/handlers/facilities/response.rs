//! Facility response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Facility;

/// Facility representation returned by the API
#[derive(Debug, Serialize)]
pub struct FacilityResponse {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub sport_type: Vec<String>,
    pub court_layout: Option<serde_json::Value>,
    pub description: String,
    pub price_per_hour: f64,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub rating: f64,
    pub reviews_count: i32,
    pub amenities: Vec<String>,
    pub opening_hours: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Facility> for FacilityResponse {
    fn from(f: Facility) -> Self {
        Self {
            id: f.id,
            owner_id: f.owner_id,
            name: f.name,
            sport_type: f.sport_types,
            court_layout: f.court_layout,
            description: f.description,
            price_per_hour: f.price_per_hour,
            image_url: f.image_url,
            location: f.location,
            rating: f.rating,
            reviews_count: f.reviews_count,
            amenities: f.amenities,
            opening_hours: f.opening_hours,
            is_active: f.is_active,
            created_at: f.created_at,
            updated_at: f.updated_at,
        }
    }
}

/// Active facility count
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}

/// Facility count for one sport
#[derive(Debug, Serialize)]
pub struct PopularSportResponse {
    #[serde(rename = "sportType")]
    pub sport_type: String,
    pub courts: i64,
}

/// Favorite creation response
#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub message: String,
    pub favorite_id: i64,
}

/// Status toggle response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
    pub is_active: bool,
}

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
