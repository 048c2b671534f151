//! HTTP middleware

mod metrics;

pub use metrics::{MetricsMiddleware, USER_ID_HEADER};
