pub mod notification;

pub use notification::ReadReceipt;
pub use service_core::error::ErrorResponse;
