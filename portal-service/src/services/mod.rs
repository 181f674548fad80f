pub mod jwt;
pub mod notification_store;

pub use jwt::{TokenClaims, TokenVerifier};
pub use notification_store::{LoggingNotificationStore, NotificationStore, StoreError};
