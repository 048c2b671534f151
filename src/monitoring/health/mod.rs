//! Health checking
//!
//! Probes are timed and classified by [`execute_probe`]; the monitor records
//! every result and alerts on failures.

mod probes;
mod runner;


pub use probes::{ConnectivityProbe, check_with_deadline};
pub use runner::execute_probe;

/// Health check name for the database probe
pub const DATABASE_CHECK: &str = "database";
/// Health check name for the cache probe
pub const REDIS_CHECK: &str = "redis";

#[cfg(test)]
pub(crate) use probes::MockConnectivityProbe;
