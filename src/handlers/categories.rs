use crate::entities::category;
use crate::errors::ServiceError;
use crate::handlers::{from_epoch, DeleteResponse};
use crate::services::categories::CreateCategoryInput;
use crate::AppState;
use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Wire shape of a category row.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<category::Model> for CategoryResponse {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: from_epoch(model.created_at),
            updated_at: from_epoch(model.updated_at),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteCategoryInput {
    #[validate(custom = "crate::services::validate_identifier")]
    pub id: String,
}

/// Routes for the `category` namespace.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/category.list", get(list_categories))
        .route("/category.create", post(create_category))
        .route("/category.delete", post(delete_category))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/rpc/category.list",
    responses(
        (status = 200, description = "All categories", body = [CategoryResponse])
    ),
    tag = "Category"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ServiceError> {
    let rows = state.services.categories.list().await?;
    Ok(Json(rows.into_iter().map(CategoryResponse::from).collect()))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/rpc/category.create",
    request_body = CreateCategoryInput,
    responses(
        (status = 200, description = "Created category", body = CategoryResponse),
        (status = 400, description = "Validation failure", body = crate::errors::ErrorResponse)
    ),
    tag = "Category"
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategoryInput>,
) -> Result<Json<CategoryResponse>, ServiceError> {
    input.validate()?;
    let row = state.services.categories.create(input).await?;
    Ok(Json(row.into()))
}

/// Delete a category; referencing items are detached, not removed
#[utoipa::path(
    post,
    path = "/rpc/category.delete",
    request_body = DeleteCategoryInput,
    responses(
        (status = 200, description = "Deletion outcome", body = DeleteResponse),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse)
    ),
    tag = "Category"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Json(input): Json<DeleteCategoryInput>,
) -> Result<Json<DeleteResponse>, ServiceError> {
    input.validate()?;
    state.services.categories.delete(&input.id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
