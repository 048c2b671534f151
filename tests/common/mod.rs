//! Common test utilities for storefront-monitor
//!
//! - In-memory SQLite database support
//! - Configuration and monitor fixtures

pub mod database;
pub mod fixtures;

pub use database::TestDatabase;
pub use fixtures::{ConfigFactory, FailingProbe, StaticProbe};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}
