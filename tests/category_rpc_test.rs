mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn create_then_list_returns_canonical_row() {
    let app = TestApp::new().await;

    let (status, created) = app
        .post("/rpc/category.create", json!({ "name": "Food" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Food");
    assert!(created["id"].is_string());
    assert!(created["createdAt"].is_string());
    assert!(created["updatedAt"].is_string());
    // Optional description was not supplied
    assert!(created.get("description").is_none() || created["description"].is_null());

    let (status, listed) = app.get("/rpc/category.list").await;
    assert_eq!(status, StatusCode::OK);
    let rows = listed.as_array().expect("list returns an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Food");
    assert_eq!(rows[0]["id"], created["id"]);
}

#[tokio::test]
async fn create_carries_optional_description() {
    let app = TestApp::new().await;

    let (status, created) = app
        .post(
            "/rpc/category.create",
            json!({ "name": "Drinks", "description": "Bottled and canned" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["description"], "Bottled and canned");
}

#[tokio::test]
async fn create_rejects_invalid_name_before_store_access() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/rpc/category.create", json!({ "name": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("name"));

    let long_name = "x".repeat(101);
    let (status, _) = app
        .post("/rpc/category.create", json!({ "name": long_name }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let long_description = "x".repeat(501);
    let (status, _) = app
        .post(
            "/rpc/category.create",
            json!({ "name": "ok", "description": long_description }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing reached the store
    let (_, listed) = app.get("/rpc/category.list").await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_removes_row() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post("/rpc/category.create", json!({ "name": "Food" }))
        .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = app.post("/rpc/category.delete", json!({ "id": id })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, listed) = app.get("/rpc/category.list").await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_unknown_id_reports_success() {
    // Deleting an id with no row is a silent no-op by contract.
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/rpc/category.delete",
            json!({ "id": "550e8400-e29b-41d4-a716-446655440000" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn delete_rejects_malformed_id() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/rpc/category.delete", json!({ "id": "not-a-uuid" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
