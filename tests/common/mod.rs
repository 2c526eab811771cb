use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use mottainai_api::{
    config::AppConfig,
    db::{establish_connection_with_config, run_migrations, DbConfig},
    AppState,
};

/// Helper harness for spinning up the application router backed by a
/// throwaway SQLite database.
///
/// Not every test binary uses every helper.
#[allow(dead_code)]
pub struct TestApp {
    router: Router,
    pub state: AppState,
    // Keeps the database file alive for the lifetime of the test
    _tmp: TempDir,
}

#[allow(dead_code)]
impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let db_path = tmp.path().join("mottainai_test.db");
        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let db_cfg = DbConfig {
            url: db_url.clone(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };
        let db = establish_connection_with_config(&db_cfg)
            .await
            .expect("connect to test database");
        run_migrations(&db).await.expect("run migrations");

        let cfg = AppConfig::new(db_url, "127.0.0.1".to_string(), 0, "test".to_string());
        let state = AppState::new(Arc::new(db), cfg);
        let router = mottainai_api::app_router(state.clone());

        Self {
            router,
            state,
            _tmp: tmp,
        }
    }

    /// Issue a GET and decode the JSON body.
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .expect("build request");
        self.send(request).await
    }

    /// Issue a POST with a JSON body and decode the JSON response.
    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("build request");
        self.send(request).await
    }

    /// Dispatch a raw request and return the raw response (for header and
    /// status assertions).
    pub async fn dispatch(&self, request: Request<Body>) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("dispatch request")
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.dispatch(request).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read response body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("decode JSON body")
        };
        (status, json)
    }
}
