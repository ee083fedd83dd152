//! Booking request DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

/// Booking creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub facility_id: i64,

    pub court_id: Option<i32>,

    pub sport_type: Option<String>,

    pub booking_date: NaiveDate,

    pub start_time: DateTime<Utc>,

    pub end_time: DateTime<Utc>,

    #[validate(range(min = 0.0))]
    pub total_price: f64,

    /// Human-readable slot labels, used for the default note
    #[serde(default)]
    pub time_slots: Vec<String>,

    pub notes: Option<String>,
}

/// Booking search query: all bookings for a facility on a date
#[derive(Debug, Deserialize)]
pub struct SearchBookingsQuery {
    pub facility_id: i64,
    pub date: NaiveDate,
    pub sport_type: Option<String>,
}
