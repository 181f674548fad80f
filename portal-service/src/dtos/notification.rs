use serde::{Deserialize, Serialize};

/// Acknowledgement body for the notification read endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadReceipt {
    pub success: bool,
    pub message: String,
}

impl ReadReceipt {
    pub fn single(notification_id: &str) -> Self {
        Self {
            success: true,
            message: format!("Notification {} marked as read", notification_id),
        }
    }

    pub fn all() -> Self {
        Self {
            success: true,
            message: "All notifications marked as read".to_string(),
        }
    }
}
