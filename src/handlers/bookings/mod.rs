//! Booking handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Booking routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_bookings))
        .route("/", post(handler::create_booking))
        .route("/search", get(handler::search_bookings))
        .route("/owner", get(handler::list_owner_bookings))
}
