use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Store panicked: {0}")]
    Panicked(String),
}

/// Persistence capability behind the notification read endpoints.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Mark one notification as read. Unknown ids are not an error.
    async fn mark_read(&self, notification_id: &str) -> Result<(), StoreError>;

    /// Mark every notification of `user_id` as read; `None` when the caller
    /// is anonymous.
    async fn mark_all_read(&self, user_id: Option<&str>) -> Result<(), StoreError>;
}

/// Store that acknowledges every call and only logs it.
#[derive(Debug, Default)]
pub struct LoggingNotificationStore;

impl LoggingNotificationStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationStore for LoggingNotificationStore {
    async fn mark_read(&self, notification_id: &str) -> Result<(), StoreError> {
        tracing::debug!(notification_id = %notification_id, "Marking notification as read");
        Ok(())
    }

    async fn mark_all_read(&self, user_id: Option<&str>) -> Result<(), StoreError> {
        tracing::info!(user_id = user_id.unwrap_or("-"), "Marking all notifications as read");
        Ok(())
    }
}
