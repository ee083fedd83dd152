//! Notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::constants::priorities;

/// Notification database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub priority: String,
    pub read: bool,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Numeric rank of a priority, lower sorts first (high > medium > low)
pub fn priority_rank(priority: &str) -> i16 {
    match priority {
        priorities::HIGH => 0,
        priorities::MEDIUM => 1,
        priorities::LOW => 2,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_ordering() {
        assert!(priority_rank("high") < priority_rank("medium"));
        assert!(priority_rank("medium") < priority_rank("low"));
        assert!(priority_rank("low") < priority_rank("bogus"));
    }
}
