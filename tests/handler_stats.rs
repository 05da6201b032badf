mod common;

use axum_test::TestServer;
use chrono::{Duration, Utc};

use common::TEST_API_KEY;
use finyeza::domain::entities::Click;
use finyeza::domain::repositories::LinkStore;

const API_KEY_HEADER: &str = "x-api-key";

#[tokio::test]
async fn test_stats_returns_link_and_recent_clicks() {
    let (state, store) = common::create_test_state();
    common::seed_link(&store, "bundle", "https://files.example.com/data.zip", true).await;

    let base = Utc::now();
    for i in 0..3 {
        store
            .append_click(
                "bundle",
                Click::new(base + Duration::seconds(i), format!("10.0.0.{i}"), None),
            )
            .await
            .unwrap();
    }
    store.increment_clicks("bundle", 3).await.unwrap();

    let server = TestServer::new(common::api_router(state)).unwrap();

    let response = server
        .get("/api/stats/bundle")
        .add_header(API_KEY_HEADER, TEST_API_KEY)
        .await;

    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["shortcode"], "bundle");
    assert_eq!(body["destination"], "https://files.example.com/data.zip");
    assert_eq!(body["enabled"], true);
    assert_eq!(body["is_zip"], true);
    assert_eq!(body["total_clicks"], 3);

    let clicks = body["recent_clicks"].as_array().unwrap();
    assert_eq!(clicks.len(), 3);
    // Newest first.
    assert_eq!(clicks[0]["ip"], "10.0.0.2");
    assert_eq!(clicks[2]["ip"], "10.0.0.0");
}

#[tokio::test]
async fn test_stats_is_case_insensitive() {
    let (state, store) = common::create_test_state();
    common::seed_link(&store, "proj", "https://example.com/project", false).await;

    let server = TestServer::new(common::api_router(state)).unwrap();

    let response = server
        .get("/api/stats/PROJ")
        .add_header(API_KEY_HEADER, TEST_API_KEY)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["shortcode"], "proj");
}

#[tokio::test]
async fn test_stats_unknown_code_returns_404() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::api_router(state)).unwrap();

    let response = server
        .get("/api/stats/ghost")
        .add_header(API_KEY_HEADER, TEST_API_KEY)
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_stats_requires_api_key() {
    let (state, _store) = common::create_test_state();
    let server = TestServer::new(common::api_router(state)).unwrap();

    let response = server.get("/api/stats/proj").await;

    response.assert_status_unauthorized();
}
