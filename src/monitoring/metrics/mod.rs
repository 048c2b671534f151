//! Metrics snapshot and threshold rules
//!
//! The monitor keeps one [`SystemMetrics`](super::SystemMetrics) record that
//! request counters, health checks, and the error breakdown are folded into.

mod errors;
mod recorder;
mod snapshot;
mod thresholds;

#[cfg(test)]
mod tests;

pub use errors::{CLIENT_ERROR, ErrorMetricsSource, ErrorTracker, SERVER_ERROR};
pub use recorder::{RecorderSnapshot, RequestRecorder};
pub use snapshot::{MetricsSnapshot, MetricsUpdate, error_rate};
pub use thresholds::{ThresholdBreach, ThresholdRules};

#[cfg(test)]
pub(crate) use errors::MockErrorMetricsSource;
