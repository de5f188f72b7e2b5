mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shortly::api::handlers::shorten_handler;
use shortly::domain::repositories::UrlStore;

#[tokio::test]
async fn test_shorten_first_url_gets_first_alias() {
    let store = common::create_test_store();
    let app = Router::new()
        .route("/api/v1/shorten", post(shorten_handler))
        .with_state(common::create_test_state(store.clone()));

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["Result"], "http://localhost:8080/a");
    assert!(json.get("result").is_none());

    let record = store.get_by_id(0).await.unwrap().unwrap();
    assert_eq!(record.original, "https://example.com");
    assert_eq!(record.alias, "a");
    assert_eq!(record.visit_count, 0);
}

#[tokio::test]
async fn test_shorten_sequential_aliases() {
    let store = common::create_test_store();
    let app = Router::new()
        .route("/api/v1/shorten", post(shorten_handler))
        .with_state(common::create_test_state(store));

    let server = TestServer::new(app).unwrap();

    let mut results = Vec::new();
    for url in ["https://a.example", "https://b.example", "https://c.example"] {
        let response = server
            .post("/api/v1/shorten")
            .json(&json!({ "url": url }))
            .await;
        response.assert_status_ok();
        results.push(response.json::<serde_json::Value>()["Result"].clone());
    }

    assert_eq!(results[0], "http://localhost:8080/a");
    assert_eq!(results[1], "http://localhost:8080/b");
    assert_eq!(results[2], "http://localhost:8080/c");
}

#[tokio::test]
async fn test_shorten_same_url_twice_gets_two_aliases() {
    let store = common::create_test_store();
    let app = Router::new()
        .route("/api/v1/shorten", post(shorten_handler))
        .with_state(common::create_test_state(store.clone()));

    let server = TestServer::new(app).unwrap();

    for _ in 0..2 {
        server
            .post("/api/v1/shorten")
            .json(&json!({ "url": "https://example.com" }))
            .await
            .assert_status_ok();
    }

    assert_eq!(store.len().unwrap(), 2);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let store = common::create_test_store();
    let app = Router::new()
        .route("/api/v1/shorten", post(shorten_handler))
        .with_state(common::create_test_state(store.clone()));

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let store = common::create_test_store();
    let app = Router::new()
        .route("/api/v1/shorten", post(shorten_handler))
        .with_state(common::create_test_state(store.clone()));

    let server = TestServer::new(app).unwrap();

    let response = server.post("/api/v1/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_shorten_relative_url() {
    let store = common::create_test_store();
    let app = Router::new()
        .route("/api/v1/shorten", post(shorten_handler))
        .with_state(common::create_test_state(store.clone()));

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "example.com/path" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid URL format");
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_shorten_malformed_json() {
    let store = common::create_test_store();
    let app = Router::new()
        .route("/api/v1/shorten", post(shorten_handler))
        .with_state(common::create_test_state(store.clone()));

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/v1/shorten")
        .text("{\"url\": ")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid request body");
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_shorten_rejects_urls_the_parser_would_repair() {
    let store = common::create_test_store();
    let app = Router::new()
        .route("/api/v1/shorten", post(shorten_handler))
        .with_state(common::create_test_state(store.clone()));

    let server = TestServer::new(app).unwrap();

    for url in [
        "https://example.com/a\nb",
        " https://example.com",
        "https:example.com",
    ] {
        let response = server
            .post("/api/v1/shorten")
            .json(&json!({ "url": url }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    assert!(store.is_empty().unwrap());
}
