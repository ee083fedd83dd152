//! Authentication service

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    config::Config,
    constants::{notification_types, priorities, roles},
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    services::NotificationService,
    utils::{crypto, validation},
};

/// Access token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// User id
    pub id: i64,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Password-reset token claims (single-purpose, short-lived)
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetClaims {
    pub id: i64,
    pub email: String,
    pub purpose: String,
    pub exp: i64,
}

/// Purpose tag carried by reset tokens
const RESET_PURPOSE: &str = "password_reset";

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub async fn register(
        pool: &PgPool,
        username: &str,
        email: &str,
        full_name: &str,
        password: &str,
    ) -> AppResult<User> {
        validation::validate_username(username)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if UserRepository::find_by_username_or_email(pool, username, email)
            .await?
            .is_some()
        {
            return Err(AppError::InvalidInput(
                "Username hoặc Email đã tồn tại".to_string(),
            ));
        }

        let password_hash = Self::hash_password(password)?;

        let user =
            UserRepository::create(pool, username, email, full_name, &password_hash, roles::USER)
                .await?;

        Ok(user)
    }

    /// Login with username and password, returning the user and a bearer token
    pub async fn login(
        pool: &PgPool,
        config: &Config,
        username: &str,
        password: &str,
    ) -> AppResult<(User, String, i64)> {
        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // OAuth-only accounts have no local password
        let hash = user
            .password_hash
            .as_deref()
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;

        NotificationService::notify(
            pool,
            user.id,
            notification_types::SYSTEM,
            "Đăng nhập thành công",
            &format!("Tài khoản {} vừa đăng nhập vào hệ thống", user.username),
            priorities::LOW,
            serde_json::json!({}),
        )
        .await?;

        Ok((user, access_token, expires_in))
    }

    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, user_id: i64) -> AppResult<Option<User>> {
        UserRepository::find_by_id(pool, user_id).await
    }

    /// Change password after verifying the old one
    pub async fn change_password(
        pool: &PgPool,
        user_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User không tồn tại".to_string()))?;

        let hash = user
            .password_hash
            .as_deref()
            .ok_or_else(|| AppError::InvalidInput("Mật khẩu cũ không đúng".to_string()))?;

        if !Self::verify_password(old_password, hash)? {
            return Err(AppError::InvalidInput("Mật khẩu cũ không đúng".to_string()));
        }

        let new_hash = Self::hash_password(new_password)?;
        UserRepository::update_password(pool, user_id, &new_hash).await?;

        Ok(())
    }

    /// Issue a reset token for the account behind an email address.
    ///
    /// Returns `None` when no account matches; callers answer with the same
    /// neutral message either way so the endpoint cannot be used to probe for
    /// registered emails. Delivery is out of scope: the link is logged.
    pub async fn forgot_password(
        pool: &PgPool,
        config: &Config,
        email: &str,
    ) -> AppResult<Option<String>> {
        let Some(user) = UserRepository::find_by_email(pool, email).await? else {
            return Ok(None);
        };

        let reset_token = Self::generate_reset_token(&user, config)?;
        let reset_url = format!("{}/reset-password/{}", config.server.frontend_url, reset_token);

        tracing::info!(user_id = user.id, reset_url = %reset_url, "Password reset link issued");

        Ok(Some(reset_token))
    }

    /// Validate a reset token, returning the user id it belongs to
    pub async fn verify_reset_token(
        pool: &PgPool,
        config: &Config,
        token: &str,
    ) -> AppResult<i64> {
        let claims = Self::decode_reset_token(token, &config.jwt.secret)?;

        if UserRepository::find_by_id(pool, claims.id).await?.is_none() {
            return Err(AppError::InvalidInput("User không tồn tại".to_string()));
        }

        Ok(claims.id)
    }

    /// Reset a password with a valid, unused reset token.
    ///
    /// Consumed tokens are marked in Redis until their natural expiry, so a
    /// token works exactly once.
    pub async fn reset_password(
        pool: &PgPool,
        mut redis: ConnectionManager,
        config: &Config,
        token: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let claims = Self::decode_reset_token(token, &config.jwt.secret)?;

        let used_key = format!("reset_used:{}", crypto::hash_string(token));
        let already_used: bool = redis.exists(&used_key).await?;
        if already_used {
            return Err(AppError::InvalidInput(
                "Token không hợp lệ hoặc đã hết hạn".to_string(),
            ));
        }

        let user = UserRepository::find_by_id(pool, claims.id)
            .await?
            .ok_or_else(|| AppError::NotFound("User không tồn tại".to_string()))?;

        let new_hash = Self::hash_password(new_password)?;
        UserRepository::update_password(pool, user.id, &new_hash).await?;

        let remaining = (claims.exp - Utc::now().timestamp()).max(1) as u64;
        redis.set_ex::<_, _, ()>(&used_key, "1", remaining).await?;

        Ok(())
    }

    /// Verify JWT access token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Generate an access token, returning it with its lifetime in seconds
    pub fn generate_access_token(user: &User, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(config.jwt.expiry_minutes);
        let expires_in = config.jwt.expiry_minutes * 60;

        let claims = Claims {
            sub: user.username.clone(),
            id: user.id,
            role: user.role.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Generate a password-reset token
    fn generate_reset_token(user: &User, config: &Config) -> AppResult<String> {
        let expires_at = Utc::now() + Duration::minutes(config.jwt.reset_expiry_minutes);

        let claims = ResetClaims {
            id: user.id,
            email: user.email.clone(),
            purpose: RESET_PURPOSE.to_string(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok(token)
    }

    /// Decode a reset token, rejecting wrong-purpose and expired tokens
    fn decode_reset_token(token: &str, secret: &str) -> AppResult<ResetClaims> {
        let claims = decode::<ResetClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| {
            AppError::InvalidInput("Token không hợp lệ hoặc đã hết hạn".to_string())
        })?;

        if claims.purpose != RESET_PURPOSE {
            return Err(AppError::InvalidInput(
                "Token không hợp lệ hoặc đã hết hạn".to_string(),
            ));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        Config, DatabaseConfig, GoogleConfig, JwtConfig, PaymentConfig, RedisConfig, ServerConfig,
        StorageConfig,
    };

    fn test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                rust_log: "info".to_string(),
                frontend_url: "http://localhost:3000".to_string(),
            },
            database: DatabaseConfig {
                url: "postgres://localhost/test".to_string(),
                max_connections: 1,
            },
            redis: RedisConfig {
                url: "redis://localhost:6379".to_string(),
            },
            jwt: JwtConfig {
                secret: "test-secret".to_string(),
                expiry_minutes: 60,
                reset_expiry_minutes: 15,
            },
            google: GoogleConfig {
                client_id: None,
                client_secret: None,
                redirect_url: String::new(),
            },
            storage: StorageConfig {
                upload_dir: "uploads".into(),
            },
            payment: PaymentConfig {
                momo_pay_url_base: String::new(),
                momo_redirect_url: String::new(),
                bank_account_number: "0389876420".to_string(),
                bank_account_name: "NGUYEN VAN A".to_string(),
                bank_code: "MB".to_string(),
                momo_confirm_delay_secs: 8,
                bank_confirm_delay_secs: 10,
                status_ttl_secs: 3600,
            },
        }
    }

    fn test_user() -> User {
        User {
            id: 42,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            full_name: "Alice".to_string(),
            password_hash: None,
            provider: None,
            provider_id: None,
            role: "user".to_string(),
            is_active: true,
            phone: None,
            address: None,
            avatar: None,
            favorite_sport: None,
            member_level: "Bronze".to_string(),
            total_bookings: 0,
            total_spent: 0.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hash = AuthService::hash_password("pw123secret").unwrap();
        assert!(AuthService::verify_password("pw123secret", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_access_token_round_trip() {
        let config = test_config();
        let user = test_user();

        let (token, expires_in) = AuthService::generate_access_token(&user, &config).unwrap();
        assert_eq!(expires_in, 3600);

        let claims = AuthService::verify_token(&token, &config.jwt.secret).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.id, 42);
        assert_eq!(claims.role, "user");
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let claims = Claims {
            sub: "alice".to_string(),
            id: 42,
            role: "user".to_string(),
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
            iat: (Utc::now() - Duration::hours(3)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .unwrap();

        let err = AuthService::verify_token(&token, &config.jwt.secret).unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }

    #[test]
    fn test_token_with_wrong_secret_rejected() {
        let config = test_config();
        let user = test_user();

        let (token, _) = AuthService::generate_access_token(&user, &config).unwrap();
        let err = AuthService::verify_token(&token, "other-secret").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_reset_token_purpose_enforced() {
        let config = test_config();
        let user = test_user();

        // Reset token decodes fine through the reset path
        let reset = AuthService::generate_reset_token(&user, &config).unwrap();
        let claims = AuthService::decode_reset_token(&reset, &config.jwt.secret).unwrap();
        assert_eq!(claims.id, 42);

        // An access token is not a reset token
        let (access, _) = AuthService::generate_access_token(&user, &config).unwrap();
        assert!(AuthService::decode_reset_token(&access, &config.jwt.secret).is_err());
    }
}
