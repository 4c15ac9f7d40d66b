pub mod access;
pub mod middleware;

pub use access::AccessPolicy;
