//! Booking service

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{
    db::repositories::{
        BookingRepository, FacilityRepository,
        booking_repo::{BookingWithFacility, OwnerBookingRow},
    },
    error::{AppError, AppResult},
    handlers::bookings::request::CreateBookingRequest,
    models::Booking,
};

/// Booking service for business logic
pub struct BookingService;

impl BookingService {
    /// Create a booking for a user.
    ///
    /// The referenced facility must exist; a slot that overlaps an existing
    /// non-cancelled booking on the same facility/court is rejected.
    /// Returns the booking together with the facility name.
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        payload: CreateBookingRequest,
    ) -> AppResult<(Booking, String)> {
        let facility = FacilityRepository::find_by_id(pool, payload.facility_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy sân".to_string()))?;

        if payload.end_time <= payload.start_time {
            return Err(AppError::Validation(
                "End time must be after start time".to_string(),
            ));
        }

        let notes = payload
            .notes
            .clone()
            .unwrap_or_else(|| format!("Đặt sân {}", payload.time_slots.join(", ")));

        let booking = BookingRepository::create(
            pool,
            user_id,
            payload.facility_id,
            payload.court_id,
            payload.sport_type.as_deref(),
            payload.booking_date,
            payload.start_time,
            payload.end_time,
            payload.total_price,
            Some(&notes),
        )
        .await?
        .ok_or_else(|| AppError::Conflict("Khung giờ này đã có người đặt".to_string()))?;

        Ok((booking, facility.name))
    }

    /// Bookings made by a user
    pub async fn list_for_user(pool: &PgPool, user_id: i64) -> AppResult<Vec<BookingWithFacility>> {
        BookingRepository::list_by_user(pool, user_id).await
    }

    /// Bookings for a facility on a date, optionally filtered by sport
    pub async fn search(
        pool: &PgPool,
        facility_id: i64,
        date: NaiveDate,
        sport_type: Option<&str>,
    ) -> AppResult<Vec<Booking>> {
        BookingRepository::search(pool, facility_id, date, sport_type).await
    }

    /// Bookings on facilities owned by a host
    pub async fn list_for_owner(pool: &PgPool, owner_id: i64) -> AppResult<Vec<OwnerBookingRow>> {
        BookingRepository::list_by_owner(pool, owner_id).await
    }
}
