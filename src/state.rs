//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use redis::aio::ConnectionManager;
use sqlx::PgPool;

use crate::{config::Config, services::ChatRegistry};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: PgPool,

    /// Redis connection manager
    pub redis: ConnectionManager,

    /// Live chat connection registry
    pub chat: ChatRegistry,

    /// HTTP client for outbound calls (OAuth userinfo)
    pub http: reqwest::Client,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, redis: ConnectionManager, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                redis,
                chat: ChatRegistry::new(),
                http: reqwest::Client::new(),
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a clone of the Redis connection manager
    pub fn redis(&self) -> ConnectionManager {
        self.inner.redis.clone()
    }

    /// Get a reference to the chat connection registry
    pub fn chat(&self) -> &ChatRegistry {
        &self.inner.chat
    }

    /// Get a reference to the outbound HTTP client
    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
