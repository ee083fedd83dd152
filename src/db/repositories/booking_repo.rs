//! Booking repository

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Postgres, Transaction};

use crate::{
    constants::{booking_status, payment_status},
    error::AppResult,
    models::{Booking, member_level_for_spend},
};

/// Booking row joined with its facility, for user-facing listings
#[derive(Debug, sqlx::FromRow)]
pub struct BookingWithFacility {
    pub id: i64,
    pub user_id: i64,
    pub facility_id: i64,
    pub facility_name: Option<String>,
    pub facility_location: Option<String>,
    pub court_id: Option<i32>,
    pub sport_type: Option<String>,
    pub booking_date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_price: f64,
    pub status: String,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Booking row joined with customer and facility, for the host dashboard
#[derive(Debug, sqlx::FromRow)]
pub struct OwnerBookingRow {
    pub id: i64,
    pub customer: Option<String>,
    pub phone: Option<String>,
    pub facility: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_price: f64,
    pub status: String,
}

/// Repository for booking database operations
pub struct BookingRepository;

impl BookingRepository {
    /// Insert a booking after checking the slot is free.
    ///
    /// Runs in a transaction so the overlap check and the insert see the same
    /// snapshot; the exclusion constraint in the schema backs this up under
    /// concurrency. Returns `Ok(None)` when the slot conflicts.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        facility_id: i64,
        court_id: Option<i32>,
        sport_type: Option<&str>,
        booking_date: NaiveDate,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        total_price: f64,
        notes: Option<&str>,
    ) -> AppResult<Option<Booking>> {
        let mut tx: Transaction<'_, Postgres> = pool.begin().await?;

        let conflicts: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM bookings
                WHERE facility_id = $1
                  AND COALESCE(court_id, -1) = COALESCE($2, -1)
                  AND status <> 'cancelled'
                  AND start_time < $4
                  AND $3 < end_time
            )
            "#,
        )
        .bind(facility_id)
        .bind(court_id)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(&mut *tx)
        .await?;

        if conflicts {
            tx.rollback().await?;
            return Ok(None);
        }

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (user_id, facility_id, court_id, sport_type, booking_date,
                 start_time, end_time, total_price, status, payment_status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending', 'unpaid', $9)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(facility_id)
        .bind(court_id)
        .bind(sport_type)
        .bind(booking_date)
        .bind(start_time)
        .bind(end_time)
        .bind(total_price)
        .bind(notes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(booking))
    }

    /// Find booking by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(r#"SELECT * FROM bookings WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(booking)
    }

    /// Bookings made by a user, newest first
    pub async fn list_by_user(pool: &PgPool, user_id: i64) -> AppResult<Vec<BookingWithFacility>> {
        let bookings = sqlx::query_as::<_, BookingWithFacility>(
            r#"
            SELECT
                b.id, b.user_id, b.facility_id,
                f.name AS facility_name, f.location AS facility_location,
                b.court_id, b.sport_type, b.booking_date, b.start_time, b.end_time,
                b.total_price, b.status, b.payment_status, b.payment_method,
                b.notes, b.created_at
            FROM bookings b
            LEFT JOIN facilities f ON f.id = b.facility_id
            WHERE b.user_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(bookings)
    }

    /// Bookings for a facility on a date, optionally filtered by sport
    pub async fn search(
        pool: &PgPool,
        facility_id: i64,
        date: NaiveDate,
        sport_type: Option<&str>,
    ) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE facility_id = $1
              AND booking_date = $2
              AND ($3::text IS NULL OR sport_type = $3)
            ORDER BY start_time
            "#,
        )
        .bind(facility_id)
        .bind(date)
        .bind(sport_type)
        .fetch_all(pool)
        .await?;

        Ok(bookings)
    }

    /// Bookings on facilities owned by a host
    pub async fn list_by_owner(pool: &PgPool, owner_id: i64) -> AppResult<Vec<OwnerBookingRow>> {
        let rows = sqlx::query_as::<_, OwnerBookingRow>(
            r#"
            SELECT
                b.id,
                u.full_name AS customer,
                u.phone,
                f.name AS facility,
                b.start_time, b.end_time, b.total_price, b.status
            FROM bookings b
            JOIN facilities f ON f.id = b.facility_id
            LEFT JOIN users u ON u.id = b.user_id
            WHERE f.owner_id = $1
            ORDER BY b.start_time DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Mark a booking paid and confirmed, and roll the payer's totals forward.
    ///
    /// Both updates run in one transaction so booking state and user totals
    /// cannot drift apart.
    pub async fn confirm_paid(
        pool: &PgPool,
        booking_id: i64,
        payment_method: &str,
        transaction_id: Option<&str>,
    ) -> AppResult<Option<Booking>> {
        let mut tx: Transaction<'_, Postgres> = pool.begin().await?;

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = $2, payment_status = $3, payment_method = $4,
                transaction_id = COALESCE($5, transaction_id), updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(booking_id)
        .bind(booking_status::CONFIRMED)
        .bind(payment_status::PAID)
        .bind(payment_method)
        .bind(transaction_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(booking) = booking else {
            tx.rollback().await?;
            return Ok(None);
        };

        let new_total_spent: f64 = sqlx::query_scalar(
            r#"
            UPDATE users
            SET total_bookings = total_bookings + 1,
                total_spent = total_spent + $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING total_spent
            "#,
        )
        .bind(booking.user_id)
        .bind(booking.total_price)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(r#"UPDATE users SET member_level = $2 WHERE id = $1"#)
            .bind(booking.user_id)
            .bind(member_level_for_spend(new_total_spent))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(booking))
    }

    /// Count bookings created today
    pub async fn count_today(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM bookings WHERE created_at::date = CURRENT_DATE"#,
        )
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Total revenue over paid bookings
    pub async fn total_revenue(pool: &PgPool) -> AppResult<f64> {
        let revenue: f64 = sqlx::query_scalar(
            r#"SELECT COALESCE(SUM(total_price), 0) FROM bookings WHERE payment_status = 'paid'"#,
        )
        .fetch_one(pool)
        .await?;

        Ok(revenue)
    }
}
