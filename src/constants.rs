//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default frontend URL used in OAuth redirects and reset links
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default access token expiry in minutes
pub const DEFAULT_JWT_EXPIRY_MINUTES: i64 = 60;

/// Default password-reset token expiry in minutes
pub const DEFAULT_RESET_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const USER: &str = "user";
    pub const HOST: &str = "host";
    pub const ADMIN: &str = "admin";
    pub const STAFF: &str = "staff";

    /// All user roles
    pub const ALL: &[&str] = &[USER, HOST, ADMIN, STAFF];
}

// =============================================================================
// MEMBER LEVELS
// =============================================================================

/// Member levels derived from lifetime spend (VND)
pub mod member_levels {
    pub const BRONZE: &str = "Bronze";
    pub const SILVER: &str = "Silver";
    pub const GOLD: &str = "Gold";
}

/// Lifetime spend required for the Silver level (VND)
pub const SILVER_SPEND_THRESHOLD: f64 = 2_000_000.0;

/// Lifetime spend required for the Gold level (VND)
pub const GOLD_SPEND_THRESHOLD: f64 = 5_000_000.0;

// =============================================================================
// BOOKING & PAYMENT STATUSES
// =============================================================================

/// Booking lifecycle statuses
pub mod booking_status {
    pub const PENDING: &str = "pending";
    pub const CONFIRMED: &str = "confirmed";
    pub const CANCELLED: &str = "cancelled";
    pub const COMPLETED: &str = "completed";
}

/// Payment statuses on a booking
pub mod payment_status {
    pub const UNPAID: &str = "unpaid";
    pub const PAID: &str = "paid";
    pub const REFUNDED: &str = "refunded";
}

/// Payment methods
pub mod payment_methods {
    pub const MOMO: &str = "momo";
    pub const BANK: &str = "bank";
    pub const CASH: &str = "cash";
}

/// Payment transaction states held in the status store
pub mod transaction_status {
    pub const PENDING: &str = "pending";
    pub const SUCCESS: &str = "success";
    pub const FAILED: &str = "failed";
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// Notification priorities, highest first
pub mod priorities {
    pub const HIGH: &str = "high";
    pub const MEDIUM: &str = "medium";
    pub const LOW: &str = "low";

    pub const ALL: &[&str] = &[HIGH, MEDIUM, LOW];
}

/// Notification type identifiers
pub mod notification_types {
    pub const SYSTEM: &str = "system";
    pub const BOOKING_CONFIRMED: &str = "booking_confirmed";
    pub const PAYMENT_SUCCESS: &str = "payment_success";
    pub const BOOKING_REMINDER: &str = "booking_reminder";
    pub const PROMOTION: &str = "promotion";
}

// =============================================================================
// UPGRADE REQUESTS
// =============================================================================

/// Host-upgrade request statuses
pub mod upgrade_status {
    pub const PENDING: &str = "pending";
    pub const APPROVED: &str = "approved";
    pub const REJECTED: &str = "rejected";
}

// =============================================================================
// PAYMENT DEFAULTS
// =============================================================================

/// Seconds a pending MoMo transaction takes to confirm in the mocked flow
pub const DEFAULT_MOMO_CONFIRM_DELAY_SECS: i64 = 8;

/// Seconds a pending bank transfer takes to confirm in the mocked flow
pub const DEFAULT_BANK_CONFIRM_DELAY_SECS: i64 = 10;

/// Seconds a payment record stays in the status store
pub const DEFAULT_PAYMENT_TTL_SECS: u64 = 3600;

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Auth endpoints - max requests
    pub const AUTH_MAX_REQUESTS: i64 = 5;
    /// Auth endpoints - window in seconds
    pub const AUTH_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum facility name length
pub const MAX_FACILITY_NAME_LENGTH: u64 = 200;

/// Maximum chat message length
pub const MAX_MESSAGE_LENGTH: u64 = 4096;

/// Maximum uploaded document size in bytes (5 MB)
pub const MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;
