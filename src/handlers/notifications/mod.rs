//! Notification handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, patch},
};

use crate::state::AppState;

/// Notification routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_notifications))
        .route("/mark-all-read", patch(handler::mark_all_as_read))
        .route("/{id}/read", patch(handler::mark_as_read))
        .route("/{id}", delete(handler::delete_notification))
}
