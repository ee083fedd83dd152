//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::constants::{GOLD_SPEND_THRESHOLD, SILVER_SPEND_THRESHOLD, member_levels, roles};

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    /// Absent for accounts created through an OAuth provider
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub provider: Option<String>,
    pub provider_id: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub favorite_sport: Option<String>,
    pub member_level: String,
    pub total_bookings: i64,
    pub total_spent: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }

    /// Check if user can manage facility listings
    pub fn can_manage_facilities(&self) -> bool {
        matches!(self.role.as_str(), roles::HOST | roles::ADMIN)
    }
}

/// Member level for a lifetime spend amount (VND)
pub fn member_level_for_spend(total_spent: f64) -> &'static str {
    if total_spent >= GOLD_SPEND_THRESHOLD {
        member_levels::GOLD
    } else if total_spent >= SILVER_SPEND_THRESHOLD {
        member_levels::SILVER
    } else {
        member_levels::BRONZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            full_name: "Alice".to_string(),
            password_hash: Some("hash".to_string()),
            provider: None,
            provider_id: None,
            role: role.to_string(),
            is_active: true,
            phone: None,
            address: None,
            avatar: None,
            favorite_sport: None,
            member_level: member_levels::BRONZE.to_string(),
            total_bookings: 0,
            total_spent: 0.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_helpers() {
        assert!(user_with_role("admin").is_admin());
        assert!(!user_with_role("user").is_admin());
        assert!(user_with_role("host").can_manage_facilities());
        assert!(user_with_role("admin").can_manage_facilities());
        assert!(!user_with_role("staff").can_manage_facilities());
    }

    #[test]
    fn test_member_level_for_spend() {
        assert_eq!(member_level_for_spend(0.0), "Bronze");
        assert_eq!(member_level_for_spend(1_999_999.0), "Bronze");
        assert_eq!(member_level_for_spend(2_000_000.0), "Silver");
        assert_eq!(member_level_for_spend(5_000_000.0), "Gold");
    }
}
