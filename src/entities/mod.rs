pub mod category;
pub mod inventory_item;

pub use category::Entity as Category;
pub use inventory_item::Entity as InventoryItem;
