//! Courtbook - Sports Facility Booking Platform
//!
//! This library provides the backend for the Courtbook platform: users browse
//! and book sports facilities, pay through mocked wallet/bank flows, chat
//! with facility owners in real time, and receive notifications; hosts manage
//! listings and bookings; admins review host-upgrade applications.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
