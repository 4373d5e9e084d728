mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use links_uteis::config::NotFoundMode;
use links_uteis::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_hello_returns_greeting() {
    let server = common::default_server();

    let response = server.get("/api/hello").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "Olá Fatec");
}

#[tokio::test]
async fn test_hello_is_plain_text() {
    let server = common::default_server();

    let response = server.get("/api/hello").await;

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let app = app_router(common::create_test_state(NotFoundMode::Empty));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/hello/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], "Olá Fatec".as_bytes());
}
