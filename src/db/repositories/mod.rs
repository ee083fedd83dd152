//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod booking_repo;
pub mod facility_repo;
pub mod message_repo;
pub mod notification_repo;
pub mod upgrade_repo;
pub mod user_repo;

pub use booking_repo::BookingRepository;
pub use facility_repo::FacilityRepository;
pub use message_repo::MessageRepository;
pub use notification_repo::NotificationRepository;
pub use upgrade_repo::UpgradeRequestRepository;
pub use user_repo::UserRepository;
