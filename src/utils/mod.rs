//! Utility modules for the monitor
//!
//! - **error**: error type, result alias, and HTTP error mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
