use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mottainai Inventory API",
        version = "0.1.0",
        description = r#"
Inventory management backend for the Mottainai barcode-scanning mobile
client.

Procedures live under the `/rpc` prefix, one route per procedure name
(`namespace.procedure`): queries are GET, mutations are POST with JSON
bodies. Wire field names are camelCase. Prices travel in major currency
units and are stored as integer cents; item barcodes are 13-digit
EAN-13/JAN codes and unique across the store.
        "#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        crate::handlers::categories::list_categories,
        crate::handlers::categories::create_category,
        crate::handlers::categories::delete_category,
        crate::handlers::inventory::list_items,
        crate::handlers::inventory::get_by_jan_code,
        crate::handlers::inventory::get_by_id,
        crate::handlers::inventory::create_item,
        crate::handlers::inventory::update_item,
        crate::handlers::inventory::delete_item,
        crate::handlers::inventory::update_quantity,
        crate::handlers::health::health_check,
    ),
    components(schemas(
        crate::handlers::categories::CategoryResponse,
        crate::handlers::categories::DeleteCategoryInput,
        crate::handlers::inventory::InventoryItemResponse,
        crate::handlers::inventory::DeleteItemInput,
        crate::handlers::DeleteResponse,
        crate::handlers::health::HealthResponse,
        crate::services::categories::CreateCategoryInput,
        crate::services::inventory::CreateItemInput,
        crate::services::inventory::UpdateItemInput,
        crate::services::inventory::AdjustQuantityInput,
        crate::errors::ErrorResponse,
    )),
    tags(
        (name = "Category", description = "Category procedures"),
        (name = "Inventory", description = "Inventory procedures"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, OpenAPI document at `/api-docs/openapi.json`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
