use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inventory item row.
///
/// `jan_code` carries the 13-digit EAN-13/JAN barcode and is unique at the
/// storage boundary. `price` is stored in integer minor currency units
/// (cents); conversion to the major-unit decimal the client sees happens in
/// the service layer. `category_id` is detached (`SET NULL`) when the
/// referenced category is deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub jan_code: String,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: i64,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
