//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_BANK_CONFIRM_DELAY_SECS, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_FRONTEND_URL,
    DEFAULT_JWT_EXPIRY_MINUTES, DEFAULT_MOMO_CONFIRM_DELAY_SECS, DEFAULT_PAYMENT_TTL_SECS,
    DEFAULT_RESET_TOKEN_EXPIRY_MINUTES, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub google: GoogleConfig,
    pub storage: StorageConfig,
    pub payment: PaymentConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Base URL of the web frontend, used for OAuth and reset-password links
    pub frontend_url: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// JWT authentication configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_minutes: i64,
    pub reset_expiry_minutes: i64,
}

/// Google OAuth configuration
///
/// Credentials are optional; the OAuth endpoints return a configuration
/// error when they are absent.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_url: String,
}

/// File storage configuration for uploaded documents
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
}

/// Payment provider configuration (mocked wallet + bank transfer)
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub momo_pay_url_base: String,
    pub momo_redirect_url: String,
    pub bank_account_number: String,
    pub bank_account_name: String,
    pub bank_code: String,
    /// Seconds before a pending MoMo transaction confirms in the mocked flow
    pub momo_confirm_delay_secs: i64,
    /// Seconds before a pending bank transfer confirms in the mocked flow
    pub bank_confirm_delay_secs: i64,
    /// TTL of a payment record in the status store
    pub status_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            redis: RedisConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            google: GoogleConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            payment: PaymentConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            expiry_minutes: env::var("JWT_EXPIRY_MINUTES")
                .unwrap_or_else(|_| DEFAULT_JWT_EXPIRY_MINUTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JWT_EXPIRY_MINUTES".to_string()))?,
            reset_expiry_minutes: env::var("RESET_TOKEN_EXPIRY_MINUTES")
                .unwrap_or_else(|_| DEFAULT_RESET_TOKEN_EXPIRY_MINUTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RESET_TOKEN_EXPIRY_MINUTES".to_string()))?,
        })
    }
}

impl GoogleConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: env::var("GOOGLE_CLIENT_ID").ok(),
            client_secret: env::var("GOOGLE_CLIENT_SECRET").ok(),
            redirect_url: env::var("GOOGLE_REDIRECT_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api/auth/google/callback".to_string()),
        })
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            upload_dir: PathBuf::from(
                env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            ),
        })
    }
}

impl PaymentConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            momo_pay_url_base: env::var("MOMO_PAY_URL_BASE")
                .unwrap_or_else(|_| "https://test-payment.momo.vn/v2/gateway/pay".to_string()),
            momo_redirect_url: env::var("MOMO_REDIRECT_URL")
                .unwrap_or_else(|_| "http://localhost:3000/payment/momo/return".to_string()),
            bank_account_number: env::var("BANK_ACCOUNT_NUMBER")
                .unwrap_or_else(|_| "0389876420".to_string()),
            bank_account_name: env::var("BANK_ACCOUNT_NAME")
                .unwrap_or_else(|_| "NGUYEN VAN A".to_string()),
            bank_code: env::var("BANK_CODE").unwrap_or_else(|_| "MB".to_string()),
            momo_confirm_delay_secs: env::var("MOMO_CONFIRM_DELAY_SECS")
                .unwrap_or_else(|_| DEFAULT_MOMO_CONFIRM_DELAY_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MOMO_CONFIRM_DELAY_SECS".to_string()))?,
            bank_confirm_delay_secs: env::var("BANK_CONFIRM_DELAY_SECS")
                .unwrap_or_else(|_| DEFAULT_BANK_CONFIRM_DELAY_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BANK_CONFIRM_DELAY_SECS".to_string()))?,
            status_ttl_secs: env::var("PAYMENT_STATUS_TTL_SECS")
                .unwrap_or_else(|_| DEFAULT_PAYMENT_TTL_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PAYMENT_STATUS_TTL_SECS".to_string()))?,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8000);
        assert_eq!(server.frontend_url, "http://localhost:3000");
    }
}
