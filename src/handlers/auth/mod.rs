//! Authentication handlers

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

/// Authentication routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .route("/me", get(handler::get_me))
        .route("/change-password", post(handler::change_password))
        .route("/forgot-password", post(handler::forgot_password))
        .route("/verify-reset-token/{token}", get(handler::verify_reset_token))
        .route("/reset-password", post(handler::reset_password))
        .route("/google", get(handler::google_auth))
        .route("/google/callback", get(handler::google_callback))
}
