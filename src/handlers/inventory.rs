use crate::entities::inventory_item;
use crate::errors::ServiceError;
use crate::handlers::{from_epoch, DeleteResponse};
use crate::services::inventory::{
    to_major_units, AdjustQuantityInput, CreateItemInput, UpdateItemInput,
};
use crate::AppState;
use axum::{
    extract::{Json, Query, State},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Wire shape of an inventory item: price in major units, timestamps as
/// RFC 3339 datetimes.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemResponse {
    pub id: String,
    pub jan_code: String,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<inventory_item::Model> for InventoryItemResponse {
    fn from(model: inventory_item::Model) -> Self {
        Self {
            id: model.id,
            jan_code: model.jan_code,
            name: model.name,
            description: model.description,
            quantity: model.quantity,
            price: to_major_units(model.price),
            category_id: model.category_id,
            image_url: model.image_url,
            created_at: from_epoch(model.created_at),
            updated_at: from_epoch(model.updated_at),
        }
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct JanCodeQuery {
    #[validate(length(equal = 13, message = "janCode must be exactly 13 characters"))]
    pub jan_code: String,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct IdQuery {
    #[validate(custom = "crate::services::validate_identifier")]
    pub id: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteItemInput {
    #[validate(custom = "crate::services::validate_identifier")]
    pub id: String,
}

/// Routes for the `inventory` namespace.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/inventory.list", get(list_items))
        .route("/inventory.getByJanCode", get(get_by_jan_code))
        .route("/inventory.getById", get(get_by_id))
        .route("/inventory.create", post(create_item))
        .route("/inventory.update", post(update_item))
        .route("/inventory.delete", post(delete_item))
        .route("/inventory.updateQuantity", post(update_quantity))
}

/// List all inventory items
#[utoipa::path(
    get,
    path = "/rpc/inventory.list",
    responses(
        (status = 200, description = "All inventory items", body = [InventoryItemResponse])
    ),
    tag = "Inventory"
)]
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryItemResponse>>, ServiceError> {
    let rows = state.services.inventory.list().await?;
    Ok(Json(
        rows.into_iter().map(InventoryItemResponse::from).collect(),
    ))
}

/// Look an item up by its scanned barcode; null when absent
#[utoipa::path(
    get,
    path = "/rpc/inventory.getByJanCode",
    params(JanCodeQuery),
    responses(
        (status = 200, description = "Matching item, or null", body = InventoryItemResponse),
        (status = 400, description = "Malformed janCode", body = crate::errors::ErrorResponse)
    ),
    tag = "Inventory"
)]
pub async fn get_by_jan_code(
    State(state): State<AppState>,
    Query(query): Query<JanCodeQuery>,
) -> Result<Json<Option<InventoryItemResponse>>, ServiceError> {
    query.validate()?;
    let row = state.services.inventory.get_by_jan_code(&query.jan_code).await?;
    Ok(Json(row.map(InventoryItemResponse::from)))
}

/// Look an item up by id; null when absent
#[utoipa::path(
    get,
    path = "/rpc/inventory.getById",
    params(IdQuery),
    responses(
        (status = 200, description = "Matching item, or null", body = InventoryItemResponse),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse)
    ),
    tag = "Inventory"
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Option<InventoryItemResponse>>, ServiceError> {
    query.validate()?;
    let row = state.services.inventory.get_by_id(&query.id).await?;
    Ok(Json(row.map(InventoryItemResponse::from)))
}

/// Create an inventory item
#[utoipa::path(
    post,
    path = "/rpc/inventory.create",
    request_body = CreateItemInput,
    responses(
        (status = 200, description = "Created item", body = InventoryItemResponse),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 409, description = "Duplicate janCode", body = crate::errors::ErrorResponse)
    ),
    tag = "Inventory"
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<CreateItemInput>,
) -> Result<Json<InventoryItemResponse>, ServiceError> {
    input.validate()?;
    let row = state.services.inventory.create(input).await?;
    Ok(Json(row.into()))
}

/// Partially update an item; only supplied fields change
#[utoipa::path(
    post,
    path = "/rpc/inventory.update",
    request_body = UpdateItemInput,
    responses(
        (status = 200, description = "Updated item", body = InventoryItemResponse),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse),
        (status = 404, description = "No item with this id", body = crate::errors::ErrorResponse)
    ),
    tag = "Inventory"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Json(input): Json<UpdateItemInput>,
) -> Result<Json<InventoryItemResponse>, ServiceError> {
    input.validate()?;
    let row = state.services.inventory.update(input).await?;
    Ok(Json(row.into()))
}

/// Delete an item
#[utoipa::path(
    post,
    path = "/rpc/inventory.delete",
    request_body = DeleteItemInput,
    responses(
        (status = 200, description = "Deletion outcome", body = DeleteResponse),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse)
    ),
    tag = "Inventory"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Json(input): Json<DeleteItemInput>,
) -> Result<Json<DeleteResponse>, ServiceError> {
    input.validate()?;
    state.services.inventory.delete(&input.id).await?;
    Ok(Json(DeleteResponse { success: true }))
}

/// Apply a signed quantity delta, floor-clamped at zero
#[utoipa::path(
    post,
    path = "/rpc/inventory.updateQuantity",
    request_body = AdjustQuantityInput,
    responses(
        (status = 200, description = "Item after adjustment", body = InventoryItemResponse),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse),
        (status = 404, description = "No item with this id", body = crate::errors::ErrorResponse)
    ),
    tag = "Inventory"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    Json(input): Json<AdjustQuantityInput>,
) -> Result<Json<InventoryItemResponse>, ServiceError> {
    input.validate()?;
    let row = state.services.inventory.adjust_quantity(input).await?;
    Ok(Json(row.into()))
}
