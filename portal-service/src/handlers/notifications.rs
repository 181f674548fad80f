use axum::{extract::State, Json};
use futures::FutureExt;
use service_core::{error::AppError, middleware::panic_message};
use std::future::Future;
use std::panic::AssertUnwindSafe;

use crate::{
    dtos::ReadReceipt,
    middleware::{MaybeAuthUser, NotificationId},
    services::StoreError,
    AppState,
};

/// Run a store call, turning a panic inside it into a `StoreError`.
async fn guarded<F>(call: F) -> Result<(), StoreError>
where
    F: Future<Output = Result<(), StoreError>>,
{
    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(StoreError::Panicked(panic_message(payload.as_ref()))),
    }
}

/// `POST /api/notifications/:id/read`
#[tracing::instrument(skip(state))]
pub async fn mark_read(
    State(state): State<AppState>,
    NotificationId(notification_id): NotificationId,
) -> Result<Json<ReadReceipt>, AppError> {
    guarded(state.notifications.mark_read(&notification_id))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, notification_id = %notification_id, "Failed to mark notification as read");
            AppError::operation_failed("Failed to mark notification as read", e)
        })?;

    Ok(Json(ReadReceipt::single(&notification_id)))
}

/// `POST /api/notifications/read-all`
#[tracing::instrument(skip_all)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    MaybeAuthUser(claims): MaybeAuthUser,
) -> Result<Json<ReadReceipt>, AppError> {
    let user_id = claims.as_ref().map(|c| c.user_id.as_str());

    guarded(state.notifications.mark_all_read(user_id))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to mark all notifications as read");
            AppError::operation_failed("Failed to mark all notifications as read", e)
        })?;

    Ok(Json(ReadReceipt::all()))
}
