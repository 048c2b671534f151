//! Database storage implementation using SeaORM
//!
//! The monitor only needs connectivity: a pooled connection and a
//! liveness ping.

mod connection;
mod types;

pub use types::{DatabaseBackendType, SeaOrmDatabase as Database};
