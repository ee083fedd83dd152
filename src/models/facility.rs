//! Facility model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Facility database model
///
/// `rating` and `reviews_count` are aggregates maintained outside the booking
/// flow; they are served as-is.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Facility {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub sport_types: Vec<String>,
    /// Court layout per sport, e.g. `[{"sport_type": "badminton", "count": 6}]`
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

impl Facility {
    /// Whether the given user may modify this listing
    pub fn is_managed_by(&self, user_id: i64, role: &str) -> bool {
        self.owner_id == user_id || role == crate::constants::roles::ADMIN
    }
}

/// User favorite relation
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserFavorite {
    pub id: i64,
    pub user_id: i64,
    pub facility_id: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility(owner_id: i64) -> Facility {
        Facility {
            id: 10,
            owner_id,
            name: "Sân cầu lông 54".to_string(),
            sport_types: vec!["badminton".to_string()],
            court_layout: None,
            description: String::new(),
            price_per_hour: 80_000.0,
            image_url: None,
            location: None,
            rating: 0.0,
            reviews_count: 0,
            amenities: vec![],
            opening_hours: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_managed_by() {
        let f = facility(7);
        assert!(f.is_managed_by(7, "host"));
        assert!(f.is_managed_by(99, "admin"));
        assert!(!f.is_managed_by(99, "user"));
    }
}
