//! Booking model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Booking database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub facility_id: i64,
    pub court_id: Option<i32>,
    pub sport_type: Option<String>,
    pub booking_date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_price: f64,
    pub status: String,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Half-open interval overlap on [start, end)
pub fn time_ranges_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_time_ranges_overlap() {
        // Partial overlap
        assert!(time_ranges_overlap(at(8), at(10), at(9), at(11)));
        // Containment
        assert!(time_ranges_overlap(at(8), at(12), at(9), at(10)));
        // Back-to-back slots do not conflict
        assert!(!time_ranges_overlap(at(8), at(10), at(10), at(12)));
        // Disjoint
        assert!(!time_ranges_overlap(at(8), at(9), at(14), at(15)));
    }
}
