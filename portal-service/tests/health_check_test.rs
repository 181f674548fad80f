//! End-to-end checks against a running server.

mod common;

use common::{install_metrics, PanickingStore, TestApp};
use std::sync::Arc;

#[tokio::test]
async fn health_check_returns_200() {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    let response = app
        .client()
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "portal-service-test");
}

#[tokio::test]
async fn readiness_returns_200() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .post(format!("{}/api/notifications/read-all", app.address))
        .header("x-request-id", "req-123")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let headers = response.headers();
    assert_eq!(headers["x-request-id"], "req-123");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
}

#[tokio::test]
async fn unknown_route_is_404_json() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .get(format!("{}/api/nope", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);
    assert!(response.headers().contains_key("x-request-id"));
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, serde_json::json!({ "error": "Not found" }));
}

#[tokio::test]
async fn metrics_endpoint_reports_served_requests() {
    // Arrange
    install_metrics();
    let app = TestApp::spawn().await;
    let client = app.client();

    client
        .post(format!("{}/api/notifications/read-all", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    // Act
    let response = client
        .get(format!("{}/metrics", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status(), 200);
    let scrape = response.text().await.expect("Failed to read metrics");
    assert!(scrape.contains("http_requests_total"), "scrape was: {}", scrape);
    assert!(scrape.contains("/api/notifications/read-all"), "scrape was: {}", scrape);
}

#[tokio::test]
async fn panicking_store_gets_json_500_and_server_keeps_serving() {
    let app = TestApp::spawn_with_store(Arc::new(PanickingStore)).await;
    let client = app.client();

    let response = client
        .post(format!("{}/api/notifications/42/read", app.address))
        .send()
        .await
        .expect("Connection dropped on panic");

    assert_eq!(response.status(), 500);
    assert!(response.headers().contains_key("x-request-id"));
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, serde_json::json!({ "error": "Failed to mark notification as read" }));

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn wrong_method_over_the_wire_is_405() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .delete(format!("{}/api/auth/me", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 405);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Method not allowed");
}
