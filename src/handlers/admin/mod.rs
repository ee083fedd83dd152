//! Admin handlers

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

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/upgrade-requests", get(handler::list_upgrade_requests))
        .route(
            "/upgrade-requests/{request_id}/approve",
            post(handler::approve_upgrade_request),
        )
        .route(
            "/upgrade-requests/{request_id}/reject",
            post(handler::reject_upgrade_request),
        )
        .route("/stats", get(handler::get_stats))
}
