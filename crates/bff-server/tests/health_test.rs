mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use helpers::{StubExecutor, assert_iso8601_timestamp, client, client_with};
use serde_json::Value;

#[tokio::test]
async fn health_check_returns_200() {
    let response = client().get("/health").await;

    response
        .assert_status(StatusCode::OK)
        .assert_content_type_contains("application/json");
}

#[tokio::test]
async fn health_check_body_has_status_timestamp_and_service() {
    let response = client().get("/health").await;
    let health: Value = response.json();

    assert_eq!(health["status"], "ok");
    assert_eq!(health["service"], "Contentstack BFF");
    assert_iso8601_timestamp(health["timestamp"].as_str().unwrap());
}

#[tokio::test]
async fn health_check_ignores_upstream_failures() {
    let executor = Arc::new(StubExecutor::error("upstream down"));
    let response = client_with(executor.clone()).get("/health").await;

    response.assert_status(StatusCode::OK);
    assert!(executor.queries().is_empty());
}

#[test]
fn health_response_serializes_correctly() {
    use bff_server::HealthResponse;

    let response = HealthResponse::default();
    let json: Value = serde_json::to_value(&response).unwrap();

    assert_eq!(json["status"], "ok");
    assert_eq!(json.as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn root_lists_endpoints() {
    let response = client().get("/").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["message"], "Contentstack BFF API");
    assert_eq!(body["version"], bff_server::version());
    assert_eq!(body["endpoints"]["health"], "/health");
    assert_eq!(body["endpoints"]["entries"], "/api/entries");
    assert_eq!(
        body["endpoints"]["personalizedConfig"],
        "/api/personalized-config"
    );
}

#[tokio::test]
async fn unknown_route_returns_404_json() {
    let response = client().get("/api/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body, serde_json::json!({ "error": "Route not found" }));
}

#[tokio::test]
async fn metrics_endpoint_is_exposed() {
    let response = client().get("/metrics").await;

    response
        .assert_status(StatusCode::OK)
        .assert_content_type_contains("text/plain");
}
