//! User service

use sqlx::PgPool;

use crate::{db::repositories::UserRepository, error::AppResult, models::User};

/// User service
pub struct UserService;

impl UserService {
    /// List every account (admin directory)
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<User>> {
        UserRepository::list_all(pool).await
    }
}
