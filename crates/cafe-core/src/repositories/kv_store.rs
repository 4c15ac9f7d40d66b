//! Key-value store trait (port)
//!
//! Durable mapping from string key to JSON value with prefix-scan
//! retrieval. Scan order is unspecified; callers sort.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, DomainError>;
    async fn set(&self, key: &str, value: Value) -> Result<(), DomainError>;
    async fn del(&self, key: &str) -> Result<(), DomainError>;
    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, DomainError>;
}
