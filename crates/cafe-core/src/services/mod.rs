//! Business services over the repository ports.

pub mod contact_service;
pub mod menu_service;

pub use contact_service::ContactService;
pub use menu_service::MenuService;

use crate::error::DomainError;

/// Trim a required field, rejecting empty values before any store access.
pub(crate) fn require(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::missing_field(field));
    }
    Ok(trimmed.to_string())
}
