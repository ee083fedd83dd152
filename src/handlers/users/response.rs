//! User directory response DTOs

use serde::Serialize;

use crate::models::User;

/// Directory entry for the admin user listing
#[derive(Debug, Serialize)]
pub struct UserDirectoryResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub is_active: bool,
}

impl From<User> for UserDirectoryResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            is_active: user.is_active,
        }
    }
}
