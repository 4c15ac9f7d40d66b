//! Repository traits (ports) implemented by the infrastructure crate.

pub mod contact_store;
pub mod kv_store;

pub use contact_store::ContactStore;
pub use kv_store::KvStore;

#[cfg(test)]
pub use kv_store::MockKvStore;
