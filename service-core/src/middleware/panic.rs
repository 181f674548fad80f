use axum::response::{IntoResponse, Response};
use std::any::Any;

use crate::error::AppError;

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Response for `CatchPanicLayer::custom`: log the panic, answer with the
/// generic JSON 500.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(payload.as_ref());
    tracing::error!(panic = %message, "Request handler panicked");
    AppError::InternalError(anyhow::anyhow!("handler panicked: {}", message)).into_response()
}
