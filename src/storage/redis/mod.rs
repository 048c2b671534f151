//! Redis storage implementation
//!
//! - `pool` - connection management, no-op mode, and the PING health check
//! - `cache` - key-value operations used for alert mirroring

mod cache;
mod pool;

pub use pool::{RedisConnection, RedisPool};
