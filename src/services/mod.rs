// Business layer: one service per RPC namespace
pub mod categories;
pub mod inventory;

pub use categories::CategoryService;
pub use inventory::InventoryService;

use sea_orm::{DbErr, SqlErr};
use uuid::Uuid;
use validator::ValidationError;

use crate::errors::ServiceError;

/// Validator hook for id fields: ids are UUIDv4 strings.
pub fn validate_identifier(value: &str) -> Result<(), ValidationError> {
    if Uuid::parse_str(value).is_ok() {
        Ok(())
    } else {
        let mut err = ValidationError::new("identifier");
        err.message = Some("must be a well-formed UUID".into());
        Err(err)
    }
}

/// Map a unique-constraint rejection from the store into a caller-visible
/// conflict; anything else stays a database error.
pub(crate) fn map_unique_violation(err: DbErr, conflict_message: &str) -> ServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ServiceError::Conflict(conflict_message.to_string())
        }
        _ => ServiceError::DatabaseError(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_validation_accepts_uuids_only() {
        assert!(validate_identifier("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_identifier("not-a-uuid").is_err());
        assert!(validate_identifier("").is_err());
    }
}
