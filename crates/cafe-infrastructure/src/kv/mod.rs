pub mod memory;
pub mod postgres;

pub use memory::MemoryKvStore;
pub use postgres::PgKvStore;
