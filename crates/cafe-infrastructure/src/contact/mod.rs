pub mod postgres;

pub use postgres::PgContactStore;
