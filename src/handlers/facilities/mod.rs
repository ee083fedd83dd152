//! Facility management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use crate::state::AppState;

/// Facility routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_facilities))
        .route("/", post(handler::create_facility))
        .route("/count", get(handler::count_facilities))
        .route("/popular-sports", get(handler::popular_sports))
        .route("/{id}", get(handler::get_facility))
        .route("/{id}", put(handler::update_facility))
        .route("/{id}", delete(handler::delete_facility))
        .route("/{id}/status", patch(handler::update_facility_status))
        .route("/{id}/favorite", post(handler::add_favorite))
        .route("/{id}/favorite", delete(handler::remove_favorite))
}
