//! Postgres-backed KV store
//!
//! One JSONB row per key in the `kv_store` table; prefix scans use a
//! LIKE pattern over the primary key. Keys are service-built (no user
//! input reaches the pattern).

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::error;

use cafe_core::error::DomainError;
use cafe_core::repositories::KvStore;

pub struct PgKvStore {
    pool: PgPool,
}

impl PgKvStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_err(e: sqlx::Error) -> DomainError {
    error!("kv store query failed: {e}");
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl KvStore for PgKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, DomainError> {
        sqlx::query_scalar::<_, Value>("SELECT value FROM kv_store WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM kv_store WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, DomainError> {
        sqlx::query_scalar::<_, Value>("SELECT value FROM kv_store WHERE key LIKE $1 || '%'")
            .bind(prefix)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)
    }
}
