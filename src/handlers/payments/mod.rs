//! Payment handlers

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

/// Payment routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/momo/create", post(handler::create_momo_payment))
        .route("/momo/status/{transaction_id}", get(handler::check_momo_payment_status))
        .route("/momo/ipn", post(handler::momo_ipn))
        .route("/bank/create", post(handler::create_bank_payment))
        .route("/bank/webhook", post(handler::bank_webhook))
        .route("/status/{transaction_id}", get(handler::check_payment_status))
        .route("/simulate/{transaction_id}", post(handler::simulate_payment))
}
