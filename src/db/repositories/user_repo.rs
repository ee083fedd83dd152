//! User repository

use sqlx::PgPool;

use crate::{error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user with a local password
    pub async fn create(
        pool: &PgPool,
        username: &str,
        email: &str,
        full_name: &str,
        password_hash: &str,
        role: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, full_name, password_hash, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(full_name)
        .bind(password_hash)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Create a user from an OAuth provider (no local password)
    pub async fn create_oauth(
        pool: &PgPool,
        username: &str,
        email: &str,
        full_name: &str,
        provider: &str,
        provider_id: &str,
        avatar: Option<&str>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, full_name, provider, provider_id, avatar)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(full_name)
        .bind(provider)
        .bind(provider_id)
        .bind(avatar)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by username
    pub async fn find_by_username(pool: &PgPool, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE username = $1"#)
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by username or email
    pub async fn find_by_username_or_email(
        pool: &PgPool,
        username: &str,
        email: &str,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT * FROM users WHERE username = $1 OR email = $2"#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Check that a user id exists
    pub async fn exists(pool: &PgPool, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// Replace a user's password hash
    pub async fn update_password(pool: &PgPool, id: i64, password_hash: &str) -> AppResult<()> {
        sqlx::query(
            r#"UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1"#,
        )
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// List all users
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(r#"SELECT * FROM users ORDER BY created_at DESC"#)
            .fetch_all(pool)
            .await?;

        Ok(users)
    }

    /// Count total users
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM users"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
