//! Authentication response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::User;

/// Compact user info returned with a login token
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserSummary,
}

/// Registration success response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
}

/// Full profile for the /me endpoint
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub total_bookings: i64,
    pub total_spent: f64,
    pub favorite_sport: Option<String>,
    pub member_level: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            phone: user.phone,
            address: user.address,
            avatar: user.avatar,
            role: user.role,
            created_at: user.created_at,
            total_bookings: user.total_bookings,
            total_spent: user.total_spent,
            favorite_sport: user.favorite_sport,
            member_level: user.member_level,
        }
    }
}

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Reset-token validation response
#[derive(Debug, Serialize)]
pub struct VerifyResetTokenResponse {
    pub valid: bool,
    pub message: String,
    pub user_id: i64,
}
