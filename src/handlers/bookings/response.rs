//! Booking response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::{
    db::repositories::booking_repo::{BookingWithFacility, OwnerBookingRow},
    models::Booking,
    utils::time::format_time_window,
};

/// Booking as listed for its owner, with facility context
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: i64,
    pub facility_id: i64,
    pub facility: Option<String>,
    pub location: Option<String>,
    pub court_id: Option<i32>,
    pub sport_type: Option<String>,
    pub user_id: i64,
    pub booking_date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub total_price: f64,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<BookingWithFacility> for BookingResponse {
    fn from(b: BookingWithFacility) -> Self {
        Self {
            id: b.id,
            facility_id: b.facility_id,
            facility: b.facility_name,
            location: b.facility_location,
            court_id: b.court_id,
            sport_type: b.sport_type,
            user_id: b.user_id,
            booking_date: b.booking_date,
            start_time: b.start_time,
            end_time: b.end_time,
            status: b.status,
            total_price: b.total_price,
            payment_status: b.payment_status,
            payment_method: b.payment_method,
            notes: b.notes,
            created_at: b.created_at,
        }
    }
}

/// Booking creation response
#[derive(Debug, Serialize)]
pub struct CreateBookingResponse {
    pub message: String,
    pub booking_id: i64,
    pub facility_name: String,
    pub total_price: f64,
    pub booking_date: NaiveDate,
    pub time_slots: Vec<String>,
}

/// Booking as returned by the public search endpoint
#[derive(Debug, Serialize)]
pub struct SearchBookingResponse {
    pub id: i64,
    pub facility_id: i64,
    pub sport_type: Option<String>,
    pub court_id: Option<i32>,
    pub user_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub total_price: f64,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for SearchBookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            facility_id: b.facility_id,
            sport_type: b.sport_type,
            court_id: b.court_id,
            user_id: b.user_id,
            start_time: b.start_time,
            end_time: b.end_time,
            status: b.status,
            total_price: b.total_price,
            payment_status: b.payment_status,
            payment_method: b.payment_method,
            notes: b.notes,
            created_at: b.created_at,
        }
    }
}

/// Booking row for the host dashboard
#[derive(Debug, Serialize)]
pub struct OwnerBookingResponse {
    pub id: i64,
    pub customer: Option<String>,
    pub phone: Option<String>,
    pub facility: Option<String>,
    pub time: String,
    pub amount: f64,
    pub status: String,
    #[serde(rename = "checkedIn")]
    pub checked_in: bool,
}

impl From<OwnerBookingRow> for OwnerBookingResponse {
    fn from(row: OwnerBookingRow) -> Self {
        let checked_in = row.status == crate::constants::booking_status::COMPLETED;
        Self {
            id: row.id,
            customer: row.customer,
            phone: row.phone,
            facility: row.facility,
            time: format_time_window(row.start_time, row.end_time),
            amount: row.total_price,
            status: row.status,
            checked_in,
        }
    }
}
