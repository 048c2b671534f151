//! Configuration validation
//!
//! Each configuration section implements [`Validate`]; `Config::validate`
//! runs them all and reports the first failure.

mod monitoring_validators;
mod storage_validators;
mod trait_def;


pub use monitoring_validators::MAX_ALERT_RETENTION_SECS;
pub use trait_def::Validate;
