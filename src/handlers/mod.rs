pub mod categories;
pub mod health;
pub mod inventory;

use crate::AppState;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Routes for every RPC procedure: one route per `namespace.procedure`
/// name, GET for queries and POST for mutations.
pub fn rpc_routes() -> Router<AppState> {
    Router::new()
        .merge(categories::routes())
        .merge(inventory::routes())
}

/// Response for the delete procedures. Deleting an id that does not exist
/// still reports success (delete is a no-op in that case).
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Materialize a stored epoch-second timestamp as a UTC datetime.
pub(crate) fn from_epoch(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
