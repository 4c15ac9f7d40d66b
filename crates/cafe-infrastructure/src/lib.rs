//! # Café Infrastructure
//!
//! Storage adapters for the café backend: Postgres-backed KV store,
//! in-memory KV store, and the contact-submission table.

pub mod contact;
pub mod db;
pub mod kv;

pub use contact::PgContactStore;
pub use db::{create_pool, MIGRATOR};
pub use kv::{MemoryKvStore, PgKvStore};
