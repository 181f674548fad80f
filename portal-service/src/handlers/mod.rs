pub mod auth;
pub mod health;
pub mod notifications;

use service_core::error::AppError;

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
