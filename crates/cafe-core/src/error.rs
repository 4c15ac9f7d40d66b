//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn missing_field(field: &str) -> Self {
        DomainError::Validation(format!("Missing required field: {field}"))
    }
}
