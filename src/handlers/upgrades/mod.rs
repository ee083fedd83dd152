//! Host-upgrade request handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Host-upgrade routes (mounted at the API root)
pub fn routes() -> Router<AppState> {
    Router::new().route("/request-host-upgrade", post(handler::request_host_upgrade))
}
