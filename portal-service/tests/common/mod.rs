//! Shared helpers for portal-service integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use portal_service::{
    build_router,
    config::{JwtConfig, PortalConfig},
    services::{LoggingNotificationStore, NotificationStore, StoreError},
    AppState, Application,
};
use service_core::config::Config as CoreConfig;
use std::sync::{Arc, Mutex, Once};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_config() -> PortalConfig {
    PortalConfig {
        common: CoreConfig {
            port: 0,
            ..CoreConfig::default()
        },
        service_name: "portal-service-test".to_string(),
        jwt: JwtConfig::new(TEST_SECRET),
    }
}

pub fn router_with_store(store: Arc<dyn NotificationStore>) -> Router {
    build_router(AppState::new(test_config(), store))
}

pub fn test_router() -> Router {
    router_with_store(Arc::new(LoggingNotificationStore::new()))
}

/// HS256 token signed with [`TEST_SECRET`].
pub fn sign_token(claims: &serde_json::Value) -> String {
    sign_token_with(claims, TEST_SECRET)
}

pub fn sign_token_with(claims: &serde_json::Value, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn request_with_auth(method: Method, uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", authorization)
        .body(Body::empty())
        .unwrap()
}

/// Drive one request through the router and decode the JSON body.
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, HeaderMap, serde_json::Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };
    (status, headers, body)
}

/// Store whose every call fails.
pub struct FailingStore;

#[async_trait]
impl NotificationStore for FailingStore {
    async fn mark_read(&self, _notification_id: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn mark_all_read(&self, _user_id: Option<&str>) -> Result<(), StoreError> {
        Err(StoreError::WriteFailed("disk full".to_string()))
    }
}

/// Store whose every call panics.
pub struct PanickingStore;

#[async_trait]
impl NotificationStore for PanickingStore {
    async fn mark_read(&self, notification_id: &str) -> Result<(), StoreError> {
        panic!("store bug while marking {}", notification_id)
    }

    async fn mark_all_read(&self, _user_id: Option<&str>) -> Result<(), StoreError> {
        panic!("store bug while marking everything")
    }
}

/// Store that remembers what it was asked to do.
#[derive(Default)]
pub struct RecordingStore {
    pub read: Mutex<Vec<String>>,
    pub read_all: Mutex<Vec<Option<String>>>,
}

#[async_trait]
impl NotificationStore for RecordingStore {
    async fn mark_read(&self, notification_id: &str) -> Result<(), StoreError> {
        self.read.lock().unwrap().push(notification_id.to_string());
        Ok(())
    }

    async fn mark_all_read(&self, user_id: Option<&str>) -> Result<(), StoreError> {
        self.read_all
            .lock()
            .unwrap()
            .push(user_id.map(|id| id.to_string()));
        Ok(())
    }
}

static METRICS: Once = Once::new();

/// Install the global Prometheus recorder once per test binary.
pub fn install_metrics() {
    METRICS.call_once(|| {
        service_core::observability::init_metrics().expect("Failed to install metrics recorder");
    });
}

/// A real server on an ephemeral port.
pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(LoggingNotificationStore::new())).await
    }

    pub async fn spawn_with_store(store: Arc<dyn NotificationStore>) -> Self {
        let app = Application::build_with_store(test_config(), store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }

    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }
}
