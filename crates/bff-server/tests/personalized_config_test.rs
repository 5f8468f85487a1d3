//! Tests de /api/personalized-config.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use helpers::{StubExecutor, assert_internal_error, assert_missing_parameter, client_with};
use serde_json::{Value, json};

const PATH: &str = "/api/personalized-config?contentTypeUid=page&locale=en-us";

fn config_items() -> Value {
    json!([{
        "title": "Summer",
        "taxonomy_path": "season",
        "audiences": [{ "group": { "name": "Adults", "attributes": [{ "key": "age", "value": "30" }] } }],
        "system": { "uid": "blt1" }
    }])
}

#[tokio::test]
async fn unwraps_items() {
    let executor = Arc::new(StubExecutor::data(json!({
        "all_personalize_config": { "items": config_items() }
    })));
    let response = client_with(executor.clone()).get(PATH).await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "success": true, "data": config_items() }));

    let queries = executor.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0], bff_graphql::build_personalized_config_query());
}

#[tokio::test]
async fn still_requires_locale() {
    let executor = Arc::new(StubExecutor::data(json!({})));
    let response = client_with(executor.clone())
        .get("/api/personalized-config?contentTypeUid=page")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_missing_parameter(&response.json(), "locale");
    assert!(executor.queries().is_empty());
}

#[tokio::test]
async fn still_requires_content_type() {
    let response = client_with(Arc::new(StubExecutor::data(json!({}))))
        .get("/api/personalized-config?locale=en-us")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_missing_parameter(&response.json(), "contentTypeUid");
}

#[tokio::test]
async fn missing_items_path_is_500() {
    let response = client_with(Arc::new(StubExecutor::data(json!({ "unexpected": true }))))
        .get(PATH)
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_internal_error(&response.json());
}

#[tokio::test]
async fn upstream_not_found_is_404() {
    let response = client_with(Arc::new(StubExecutor::status(404, "")))
        .get(PATH)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Entries not found");
}

#[tokio::test]
async fn upstream_failure_is_500() {
    let response = client_with(Arc::new(StubExecutor::error("access denied")))
        .get(PATH)
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["message"], "GraphQL errors: access denied");
}
