//! Direct-message handlers

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

/// Message routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/send", post(handler::send_message))
        .route("/conversations", get(handler::list_conversations))
        .route("/with/{user_id}", get(handler::get_history))
        .route("/chat", get(handler::chat_ws))
}
