pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::middleware::{
    handle_panic, make_request_span, metrics_middleware, request_id_middleware,
    security_headers_middleware,
};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::PortalConfig;
use crate::services::{NotificationStore, TokenVerifier};

pub use startup::Application;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PortalConfig>,
    pub jwt: TokenVerifier,
    pub notifications: Arc<dyn NotificationStore>,
}

impl AppState {
    pub fn new(config: PortalConfig, notifications: Arc<dyn NotificationStore>) -> Self {
        let jwt = TokenVerifier::new(&config.jwt);
        Self {
            config: Arc::new(config),
            jwt,
            notifications,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(handlers::health::metrics))
        .route(
            "/api/auth/me",
            get(handlers::auth::get_me).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/notifications/read-all",
            post(handlers::notifications::mark_all_read).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/notifications/:id/read",
            post(handlers::notifications::mark_read).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        // Innermost, so a panic still gets metrics, a span and the headers.
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        // Outside the trace layer so spans see the id.
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
}
