use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_categories_table::Migration),
            Box::new(m20240601_000002_create_inventory_items_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240601_000001_create_categories_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000001_create_categories_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Categories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Categories::Id)
                                .text()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Categories::Name).text().not_null())
                        .col(ColumnDef::new(Categories::Description).text().null())
                        // Epoch seconds, defaulted by the engine so rows written
                        // outside the service still carry timestamps.
                        .col(
                            ColumnDef::new(Categories::CreatedAt)
                                .big_integer()
                                .not_null()
                                .default(Expr::cust("(unixepoch())")),
                        )
                        .col(
                            ColumnDef::new(Categories::UpdatedAt)
                                .big_integer()
                                .not_null()
                                .default(Expr::cust("(unixepoch())")),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Categories::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Categories {
        Table,
        Id,
        Name,
        Description,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240601_000002_create_inventory_items_table {

    use super::m20240601_000001_create_categories_table::Categories;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000002_create_inventory_items_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(InventoryItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InventoryItems::Id)
                                .text()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::JanCode)
                                .text()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(InventoryItems::Name).text().not_null())
                        .col(ColumnDef::new(InventoryItems::Description).text().null())
                        .col(
                            ColumnDef::new(InventoryItems::Quantity)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        // Integer minor currency units (cents).
                        .col(
                            ColumnDef::new(InventoryItems::Price)
                                .big_integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(InventoryItems::CategoryId).text().null())
                        .col(ColumnDef::new(InventoryItems::ImageUrl).text().null())
                        .col(
                            ColumnDef::new(InventoryItems::CreatedAt)
                                .big_integer()
                                .not_null()
                                .default(Expr::cust("(unixepoch())")),
                        )
                        .col(
                            ColumnDef::new(InventoryItems::UpdatedAt)
                                .big_integer()
                                .not_null()
                                .default(Expr::cust("(unixepoch())")),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_inventory_items_category_id")
                                .from(InventoryItems::Table, InventoryItems::CategoryId)
                                .to(Categories::Table, Categories::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::NoAction),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_items_category_id")
                        .table(InventoryItems::Table)
                        .col(InventoryItems::CategoryId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum InventoryItems {
        Table,
        Id,
        JanCode,
        Name,
        Description,
        Quantity,
        Price,
        CategoryId,
        ImageUrl,
        CreatedAt,
        UpdatedAt,
    }
}
