mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use shortly::api::handlers::redirect_handler;
use shortly::domain::repositories::UrlStore;

#[tokio::test]
async fn test_redirect_success() {
    let store = common::create_test_store();
    common::create_test_link(&store, 0, "a", "https://example.com").await;

    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(common::create_test_state(store));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/a").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_counts_visits() {
    let store = common::create_test_store();
    common::create_test_link(&store, 0, "a", "https://example.com").await;

    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(common::create_test_state(store.clone()));

    let server = TestServer::new(app).unwrap();

    for _ in 0..3 {
        server.get("/a").await.assert_status(StatusCode::FOUND);
    }

    let record = store.get_by_alias("a").await.unwrap();
    assert_eq!(record.visit_count, 3);
}

#[tokio::test]
async fn test_redirect_keeps_original_untouched() {
    let store = common::create_test_store();
    common::create_test_link(&store, 0, "a", "https://Example.com/Path?q=1#frag").await;

    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(common::create_test_state(store));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/a").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header("location"),
        "https://Example.com/Path?q=1#frag"
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let store = common::create_test_store();
    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(common::create_test_state(store.clone()));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/zz").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn test_redirect_alias_is_case_sensitive() {
    let store = common::create_test_store();
    common::create_test_link(&store, 0, "a", "https://example.com").await;

    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(common::create_test_state(store.clone()));

    let server = TestServer::new(app).unwrap();

    server.get("/A").await.assert_status_not_found();

    let record = store.get_by_alias("a").await.unwrap();
    assert_eq!(record.visit_count, 0);
}
