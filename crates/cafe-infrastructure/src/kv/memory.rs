//! In-memory KV store backed by a DashMap. Used by the test suites;
//! iteration order is arbitrary, which keeps callers honest about sorting.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use cafe_core::error::DomainError;
use cafe_core::repositories::KvStore;

#[derive(Default)]
pub struct MemoryKvStore {
    map: DashMap<String, Value>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// All stored keys matching the prefix, for assertions on raw layout.
    pub fn keys(&self, prefix: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .map
            .iter()
            .filter(|r| r.key().starts_with(prefix))
            .map(|r| r.key().clone())
            .collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, DomainError> {
        Ok(self.map.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), DomainError> {
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), DomainError> {
        self.map.remove(key);
        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, DomainError> {
        Ok(self
            .map
            .iter()
            .filter(|r| r.key().starts_with(prefix))
            .map(|r| r.value().clone())
            .collect())
    }
}
