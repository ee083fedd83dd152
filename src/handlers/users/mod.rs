//! User directory and profile-adjacent handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// User directory routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/all", get(handler::list_users))
}

/// Routes for the authenticated user's own data
pub fn me_routes() -> Router<AppState> {
    Router::new().route("/favorites", get(handler::my_favorites))
}
