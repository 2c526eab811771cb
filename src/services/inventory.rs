use crate::entities::inventory_item::{self, Column, Entity as InventoryItem};
use crate::errors::ServiceError;
use crate::services::map_unique_violation;
use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

lazy_static! {
    static ref JAN_CODE: Regex = Regex::new(r"^\d{13}$").expect("valid jan code pattern");
}

/// Input for `inventory.create`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemInput {
    #[validate(
        length(equal = 13, message = "janCode must be exactly 13 characters"),
        regex(path = "JAN_CODE", message = "janCode must be 13 digits")
    )]
    pub jan_code: String,
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    #[validate(length(max = 1000, message = "description cannot exceed 1000 characters"))]
    pub description: Option<String>,
    #[validate(range(min = 0, message = "quantity cannot be negative"))]
    pub quantity: i32,
    /// Major currency units (e.g. yen), converted to integer cents at the
    /// storage boundary.
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,
    #[validate(custom = "crate::services::validate_identifier")]
    pub category_id: Option<String>,
    #[validate(url(message = "imageUrl must be a valid URL"))]
    pub image_url: Option<String>,
}

/// Input for `inventory.update`: one optional slot per mutable column, so a
/// partial update only touches the fields the caller supplied.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemInput {
    #[validate(custom = "crate::services::validate_identifier")]
    pub id: String,
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 1000, message = "description cannot exceed 1000 characters"))]
    pub description: Option<String>,
    #[validate(range(min = 0, message = "quantity cannot be negative"))]
    pub quantity: Option<i32>,
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: Option<f64>,
    #[validate(custom = "crate::services::validate_identifier")]
    pub category_id: Option<String>,
    #[validate(url(message = "imageUrl must be a valid URL"))]
    pub image_url: Option<String>,
}

/// Input for `inventory.updateQuantity`. The delta may be negative; the
/// resulting quantity is floor-clamped at zero.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdjustQuantityInput {
    #[validate(custom = "crate::services::validate_identifier")]
    pub id: String,
    pub delta: i32,
}

/// Convert a major-unit price to integer minor units (cents), rounding half
/// away from zero.
pub(crate) fn to_minor_units(major: f64) -> i64 {
    (major * 100.0).round() as i64
}

/// Convert stored minor units back to the major-unit value callers see.
pub(crate) fn to_major_units(minor: i64) -> f64 {
    minor as f64 / 100.0
}

/// Service for the `inventory` namespace.
#[derive(Clone)]
pub struct InventoryService {
    db: Arc<DatabaseConnection>,
}

impl InventoryService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// All items, store order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<inventory_item::Model>, ServiceError> {
        Ok(InventoryItem::find().all(&*self.db).await?)
    }

    /// Point lookup by barcode. Absence is not an error.
    #[instrument(skip(self))]
    pub async fn get_by_jan_code(
        &self,
        jan_code: &str,
    ) -> Result<Option<inventory_item::Model>, ServiceError> {
        Ok(InventoryItem::find()
            .filter(Column::JanCode.eq(jan_code))
            .one(&*self.db)
            .await?)
    }

    /// Point lookup by id. Absence is not an error.
    #[instrument(skip(self))]
    pub async fn get_by_id(
        &self,
        id: &str,
    ) -> Result<Option<inventory_item::Model>, ServiceError> {
        Ok(InventoryItem::find_by_id(id.to_owned()).one(&*self.db).await?)
    }

    /// Insert an item under a fresh id and return the stored row. A
    /// duplicate jan_code is rejected by the store's unique constraint and
    /// surfaced as a conflict.
    #[instrument(skip(self))]
    pub async fn create(
        &self,
        input: CreateItemInput,
    ) -> Result<inventory_item::Model, ServiceError> {
        let now = Utc::now().timestamp();
        let row = inventory_item::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            jan_code: Set(input.jan_code),
            name: Set(input.name),
            description: Set(input.description),
            quantity: Set(input.quantity),
            price: Set(to_minor_units(input.price)),
            category_id: Set(input.category_id),
            image_url: Set(input.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = row
            .insert(&*self.db)
            .await
            .map_err(|e| map_unique_violation(e, "an item with this janCode already exists"))?;

        info!("Created inventory item: {} ({})", row.id, row.jan_code);
        Ok(row)
    }

    /// Partial update: only the supplied fields change. Unknown id is a
    /// NotFound (there is no row to return otherwise).
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        input: UpdateItemInput,
    ) -> Result<inventory_item::Model, ServiceError> {
        let existing = InventoryItem::find_by_id(input.id.clone())
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("inventory item {} not found", input.id))
            })?;

        let mut active: inventory_item::ActiveModel = existing.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        if let Some(quantity) = input.quantity {
            active.quantity = Set(quantity);
        }
        if let Some(price) = input.price {
            active.price = Set(to_minor_units(price));
        }
        if let Some(category_id) = input.category_id {
            active.category_id = Set(Some(category_id));
        }
        if let Some(image_url) = input.image_url {
            active.image_url = Set(Some(image_url));
        }
        active.updated_at = Set(Utc::now().timestamp());

        let row = active.update(&*self.db).await?;
        info!("Updated inventory item: {}", row.id);
        Ok(row)
    }

    /// Delete by id. A missing row is a no-op, not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let result = InventoryItem::delete_by_id(id.to_owned())
            .exec(&*self.db)
            .await?;
        if result.rows_affected == 0 {
            debug!("delete matched no inventory item for id {}", id);
        } else {
            info!("Deleted inventory item: {}", id);
        }
        Ok(())
    }

    /// Apply a signed quantity delta, clamping the result at zero. The one
    /// procedure with an explicit existence check: adjusting a missing item
    /// is a NotFound.
    #[instrument(skip(self))]
    pub async fn adjust_quantity(
        &self,
        input: AdjustQuantityInput,
    ) -> Result<inventory_item::Model, ServiceError> {
        let item = InventoryItem::find_by_id(input.id.clone())
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("inventory item {} not found", input.id))
            })?;

        let new_quantity = clamped_quantity(item.quantity, input.delta);

        let mut active: inventory_item::ActiveModel = item.into();
        active.quantity = Set(new_quantity);
        active.updated_at = Set(Utc::now().timestamp());

        let row = active.update(&*self.db).await?;
        info!(
            "Adjusted quantity for item {} by {} -> {}",
            row.id, input.delta, row.quantity
        );
        Ok(row)
    }
}

/// `max(0, quantity + delta)` without wraparound on extreme deltas.
fn clamped_quantity(quantity: i32, delta: i32) -> i32 {
    quantity.saturating_add(delta).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_unit_conversion_rounds_half_away_from_zero() {
        assert_eq!(to_minor_units(10.0), 1000);
        assert_eq!(to_minor_units(0.0), 0);
        assert_eq!(to_minor_units(9.99), 999);
        assert_eq!(to_minor_units(0.005), 1);
        assert_eq!(to_minor_units(1234.56), 123456);
    }

    #[test]
    fn two_decimal_prices_round_trip_without_drift() {
        for cents in [0i64, 1, 99, 100, 999, 100_000, 123_456_789] {
            let major = to_major_units(cents);
            assert_eq!(to_minor_units(major), cents, "drift for {cents} cents");
        }
    }

    #[test]
    fn quantity_clamps_at_zero() {
        assert_eq!(clamped_quantity(2, -3), 0);
        assert_eq!(clamped_quantity(2, -2), 0);
        assert_eq!(clamped_quantity(2, -1), 1);
        assert_eq!(clamped_quantity(0, 5), 5);
        assert_eq!(clamped_quantity(0, i32::MIN), 0);
        assert_eq!(clamped_quantity(i32::MAX, 1), i32::MAX);
    }

    #[test]
    fn jan_code_pattern_requires_13_digits() {
        assert!(JAN_CODE.is_match("4901234567890"));
        assert!(!JAN_CODE.is_match("490123456789"));
        assert!(!JAN_CODE.is_match("49012345678901"));
        assert!(!JAN_CODE.is_match("490123456789x"));
    }
}
