use crate::entities::category::{self, Entity as Category};
use crate::errors::ServiceError;
use crate::services::map_unique_violation;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Input for `category.create`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryInput {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "description cannot exceed 500 characters"))]
    pub description: Option<String>,
}

/// Service for the `category` namespace.
#[derive(Clone)]
pub struct CategoryService {
    db: Arc<DatabaseConnection>,
}

impl CategoryService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// All categories, store order (insertion order for SQLite).
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<category::Model>, ServiceError> {
        Ok(Category::find().all(&*self.db).await?)
    }

    /// Insert a category under a fresh id and return the stored row.
    #[instrument(skip(self))]
    pub async fn create(
        &self,
        input: CreateCategoryInput,
    ) -> Result<category::Model, ServiceError> {
        let now = Utc::now().timestamp();
        let row = category::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(input.name),
            description: Set(input.description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = row
            .insert(&*self.db)
            .await
            .map_err(|e| map_unique_violation(e, "a category with this id already exists"))?;

        info!("Created category: {}", row.id);
        Ok(row)
    }

    /// Delete by id. A missing row is a no-op, not an error; items that
    /// referenced the category are detached by the store (`SET NULL`).
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let result = Category::delete_by_id(id.to_owned()).exec(&*self.db).await?;
        if result.rows_affected == 0 {
            debug!("delete matched no category for id {}", id);
        } else {
            info!("Deleted category: {}", id);
        }
        Ok(())
    }
}
