//! Integration tests for storefront-monitor
//!
//! These tests drive the public API with real collaborators where possible.

pub mod config_validation_tests;
pub mod database_tests;
pub mod monitor_tests;
