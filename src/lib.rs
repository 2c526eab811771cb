//! Mottainai Inventory API Library
//!
//! Typed RPC backend over an embedded SQLite store: category and inventory
//! CRUD, a floor-clamped quantity adjustment and an EAN-13/JAN barcode
//! lookup, consumed by a barcode-scanning mobile client.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;

use axum::{response::Json, routing::get, Router};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state handed to every procedure invocation. The store
/// handle is injected here once at startup; nothing reaches for a global.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: AppServices,
}

/// Business-layer services used by the RPC handlers
#[derive(Clone)]
pub struct AppServices {
    pub categories: services::CategoryService,
    pub inventory: services::InventoryService,
}

impl AppServices {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            categories: services::CategoryService::new(db.clone()),
            inventory: services::InventoryService::new(db),
        }
    }
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let services = AppServices::new(db.clone());
        Self {
            db,
            config,
            services,
        }
    }
}

/// Build the application router: RPC procedures under `/rpc`, the
/// informational root, health/status endpoints and Swagger UI. Every
/// response carries permissive CORS headers; the mobile client is served
/// from a different origin.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/status", get(api_status))
        .route("/health", get(handlers::health::health_check))
        .nest("/rpc", handlers::rpc_routes())
        .merge(openapi::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Mottainai Inventory API" }))
}

async fn api_status() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "mottainai-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
