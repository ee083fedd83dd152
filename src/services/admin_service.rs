//! Admin service

use sqlx::PgPool;

use crate::{
    db::repositories::{BookingRepository, FacilityRepository, UserRepository},
    error::AppResult,
    handlers::admin::response::AdminStatsResponse,
};

/// Admin service for platform-wide statistics
pub struct AdminService;

impl AdminService {
    /// Platform totals for the admin dashboard
    pub async fn stats(pool: &PgPool) -> AppResult<AdminStatsResponse> {
        let total_revenue = BookingRepository::total_revenue(pool).await?;
        let total_users = UserRepository::count(pool).await?;
        let total_facilities = FacilityRepository::count(pool).await?;
        let today_bookings = BookingRepository::count_today(pool).await?;

        Ok(AdminStatsResponse {
            total_revenue,
            total_users,
            total_facilities,
            today_bookings,
        })
    }
}
