//! HTTP server implementation
//!
//! Admin and health endpoints over the monitor.

pub mod builder;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
