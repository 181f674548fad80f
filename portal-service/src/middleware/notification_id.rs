use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use service_core::error::AppError;

/// The `:id` segment of a notification route. Undecodable segments are
/// rejected as a JSON 400 instead of axum's plain-text default.
#[derive(Debug)]
pub struct NotificationId(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for NotificationId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(NotificationId(id))
    }
}
