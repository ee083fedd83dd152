//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod booking_service;
pub mod chat_registry;
pub mod facility_service;
pub mod message_service;
pub mod notification_service;
pub mod oauth_service;
pub mod payment_service;
pub mod upgrade_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use booking_service::BookingService;
pub use chat_registry::ChatRegistry;
pub use facility_service::FacilityService;
pub use message_service::MessageService;
pub use notification_service::NotificationService;
pub use oauth_service::OAuthService;
pub use payment_service::PaymentService;
pub use upgrade_service::UpgradeService;
pub use user_service::UserService;
