//! Error handling for the monitor
//!
//! This module defines all error types used throughout the service.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use types::{MonitorError, Result};
