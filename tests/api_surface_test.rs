mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::TestApp;

#[tokio::test]
async fn root_returns_greeting() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Mottainai Inventory API");
}

#[tokio::test]
async fn status_reports_service_info() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "mottainai-api");
}

#[tokio::test]
async fn health_reports_database_up() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");
    assert_eq!(body["database"]["status"], "up");
}

#[tokio::test]
async fn responses_carry_permissive_cors_headers() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/rpc/inventory.list")
        .header(header::ORIGIN, "http://localhost:19000")
        .body(Body::empty())
        .unwrap();
    let response = app.dispatch(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("CORS header present");
    assert_eq!(allow_origin, "*");
}
