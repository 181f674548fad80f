pub mod auth;
pub mod notification_id;

pub use auth::{bearer_token, AuthUser, MaybeAuthUser};
pub use notification_id::NotificationId;
