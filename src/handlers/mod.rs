//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod facilities;
pub mod health;
pub mod messages;
pub mod notifications;
pub mod payments;
pub mod upgrades;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes (mounted under /api)
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(upgrades::routes())
        .nest("/auth", auth::routes())
        .nest("/users", users::routes())
        .nest("/me", users::me_routes())
        .nest("/facilities", facilities::routes())
        .nest("/bookings", bookings::routes())
        .nest("/messages", messages::routes())
        .nest("/notifications", notifications::routes())
        .nest("/payment", payments::routes())
        .nest("/admin", admin::routes())
}
