//! Metrics tests

use super::*;
use crate::config::MonitoringConfig;
use crate::monitoring::types::{AlertLevel, ErrorBreakdown, HealthCheck, HealthStatus};
use crate::monitoring::Monitor;
use crate::utils::error::MonitorError;
use std::sync::Arc;
use std::time::Duration;

fn alerts_titled(monitor: &Monitor, title: &str) -> usize {
    monitor
        .get_alerts()
        .iter()
        .filter(|alert| alert.title == title)
        .count()
}

#[test]
fn test_error_rate_percentage() {
    assert_eq!(error_rate(1000, 50), 5.0);
    assert_eq!(error_rate(200, 50), 25.0);
}

#[test]
fn test_error_rate_zero_requests() {
    assert_eq!(error_rate(0, 0), 0.0);
    assert_eq!(error_rate(0, 7), 0.0);
}

#[test]
fn test_update_metrics_overwrites_counters() {
    let monitor = Monitor::new(MonitoringConfig::default());
    monitor.update_metrics(1000, 50, Duration::from_millis(120), 12);
    monitor.update_metrics(10, 0, Duration::from_millis(80), 3);

    let metrics = monitor.get_metrics();
    assert_eq!(metrics.request_count, 10);
    assert_eq!(metrics.error_count, 0);
    assert_eq!(metrics.error_rate, 0.0);
    assert_eq!(metrics.avg_response_time, Duration::from_millis(80));
    assert_eq!(metrics.active_users, 3);
}

#[test]
fn test_rate_below_threshold_raises_nothing() {
    let monitor = Monitor::new(MonitoringConfig::default());
    let metrics = monitor.update_metrics(1000, 50, Duration::from_millis(200), 5);

    assert_eq!(metrics.error_rate, 5.0);
    assert!(monitor.get_alerts().is_empty());
}

#[test]
fn test_high_error_rate_alert() {
    let monitor = Monitor::new(MonitoringConfig::default());
    monitor.update_metrics(100, 25, Duration::from_millis(200), 5);

    let alerts = monitor.get_alerts();
    assert_eq!(alerts.len(), 1);
    let alert = &alerts[0];
    assert_eq!(alert.title, "High Error Rate Detected");
    assert_eq!(alert.level, AlertLevel::Warning);
    let metadata = alert.metadata.as_ref().unwrap();
    assert_eq!(metadata["error_rate"], serde_json::json!(25.0));
    assert_eq!(metadata["error_count"], serde_json::json!(25));
    assert_eq!(metadata["request_count"], serde_json::json!(100));
}

#[test]
fn test_error_rate_at_threshold_is_not_a_breach() {
    let monitor = Monitor::new(MonitoringConfig::default());
    monitor.update_metrics(100, 10, Duration::from_millis(200), 5);
    assert_eq!(alerts_titled(&monitor, "High Error Rate Detected"), 0);
}

#[test]
fn test_high_response_time_alert() {
    let monitor = Monitor::new(MonitoringConfig::default());
    monitor.update_metrics(100, 0, Duration::from_secs(6), 5);

    let alerts = monitor.get_alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title, "High Response Time Detected");
    assert_eq!(alerts[0].level, AlertLevel::Warning);
}

#[test]
fn test_both_thresholds_and_no_dedup() {
    let monitor = Monitor::new(MonitoringConfig::default());
    monitor.update_metrics(100, 50, Duration::from_secs(10), 1);
    monitor.update_metrics(100, 50, Duration::from_secs(10), 1);

    assert_eq!(alerts_titled(&monitor, "High Error Rate Detected"), 2);
    assert_eq!(alerts_titled(&monitor, "High Response Time Detected"), 2);
}

#[test]
fn test_thresholds_from_config() {
    let config = MonitoringConfig {
        error_rate_threshold: 1.0,
        response_time_threshold_ms: 100,
        ..MonitoringConfig::default()
    };
    let monitor = Monitor::new(config);
    monitor.update_metrics(100, 2, Duration::from_millis(150), 1);

    assert_eq!(monitor.get_alerts().len(), 2);
}

#[test]
fn test_breach_messages() {
    let rules = ThresholdRules::default();
    let metrics = crate::monitoring::SystemMetrics {
        request_count: 10,
        error_count: 5,
        error_rate: 50.0,
        ..Default::default()
    };
    let breaches = rules.evaluate(&metrics);
    assert_eq!(breaches.len(), 1);
    assert_eq!(breaches[0].message(), "Error rate is 50.00%");
}

#[test]
fn test_get_metrics_returns_a_copy() {
    let monitor = Monitor::new(MonitoringConfig::default());
    let mut copy = monitor.get_metrics();
    copy.request_count = 999;
    copy.database_health = "tampered".to_string();

    let fresh = monitor.get_metrics();
    assert_eq!(fresh.request_count, 0);
    assert_eq!(fresh.database_health, "unknown");
}

#[test]
fn test_snapshot_records_latest_health_check() {
    let snapshot = MetricsSnapshot::new();
    snapshot.record_health_check(HealthCheck::new(
        "database",
        HealthStatus::Unhealthy,
        "refused",
        Duration::from_millis(3),
    ));
    snapshot.record_health_check(HealthCheck::new(
        "database",
        HealthStatus::Healthy,
        "ok",
        Duration::from_millis(1),
    ));

    let metrics = snapshot.snapshot();
    assert_eq!(metrics.health_checks.len(), 1);
    assert!(metrics.health_checks["database"].is_healthy());
}

#[test]
fn test_error_breakdown_from_source() {
    let tracker = Arc::new(ErrorTracker::new());
    tracker.record_status(404);
    tracker.record_status(503);
    tracker.record_status(500);
    tracker.record_status(200);

    let monitor = Monitor::builder(MonitoringConfig::default())
        .with_error_source(tracker.clone())
        .build();
    monitor.update_metrics(10, 2, Duration::from_millis(10), 1);

    let breakdown = monitor.get_metrics().error_breakdown.unwrap();
    assert_eq!(breakdown.total_errors, 3);
    assert_eq!(breakdown.by_category[CLIENT_ERROR], 1);
    assert_eq!(breakdown.by_category[SERVER_ERROR], 2);
    assert!(breakdown.last_error_at.is_some());
}

#[test]
fn test_error_source_failure_keeps_previous_breakdown() {
    let mut source = MockErrorMetricsSource::new();
    let mut calls = 0;
    source.expect_error_breakdown().times(2).returning(move || {
        calls += 1;
        if calls == 1 {
            Ok(ErrorBreakdown {
                total_errors: 4,
                ..Default::default()
            })
        } else {
            Err(MonitorError::internal("collector unavailable"))
        }
    });

    let monitor = Monitor::builder(MonitoringConfig::default())
        .with_error_source(Arc::new(source))
        .build();
    monitor.update_metrics(10, 0, Duration::ZERO, 0);
    monitor.update_metrics(20, 0, Duration::ZERO, 0);

    let metrics = monitor.get_metrics();
    assert_eq!(metrics.request_count, 20);
    assert_eq!(metrics.error_breakdown.unwrap().total_errors, 4);
}

#[test]
fn test_error_tracker_reset() {
    let tracker = ErrorTracker::new();
    tracker.record("payment_declined");
    tracker.reset();
    let breakdown = tracker.error_breakdown().unwrap();
    assert_eq!(breakdown, ErrorBreakdown::default());
}

#[test]
fn test_recorder_snapshot() {
    let recorder = RequestRecorder::new();
    recorder.record(200, Duration::from_millis(10), Some("user-1"));
    recorder.record(500, Duration::from_millis(30), Some("user-2"));
    recorder.record(404, Duration::from_millis(20), Some("user-1"));

    let snapshot = recorder.snapshot();
    assert_eq!(snapshot.request_count, 3);
    assert_eq!(snapshot.error_count, 1);
    assert_eq!(snapshot.avg_response_time, Duration::from_millis(20));
    assert_eq!(snapshot.active_users, 2);
}

#[test]
fn test_recorder_flush_into_monitor() {
    let monitor = Monitor::new(MonitoringConfig::default());
    let recorder = RequestRecorder::new();
    recorder.record(200, Duration::from_millis(40), Some("10.0.0.1"));
    recorder.record(502, Duration::from_millis(60), None);

    recorder.flush_into(&monitor);
    let metrics = monitor.get_metrics();
    assert_eq!(metrics.request_count, 2);
    assert_eq!(metrics.error_count, 1);
    assert_eq!(metrics.error_rate, 50.0);
    assert_eq!(metrics.active_users, 1);
    assert_eq!(alerts_titled(&monitor, "High Error Rate Detected"), 1);

    // Totals persist across flushes, the user window does not
    let next = recorder.flush_into(&monitor);
    assert_eq!(next.request_count, 2);
    assert_eq!(next.active_users, 0);
}

#[tokio::test]
async fn test_flush_task_stops_on_shutdown() {
    let monitor = Monitor::new(MonitoringConfig::default());
    let recorder = Arc::new(RequestRecorder::new());
    let (shutdown_tx, shutdown_rx) = tokio::sync::broadcast::channel(1);

    let handle = recorder.start_flush_task(monitor, Duration::from_secs(3600), shutdown_rx);
    shutdown_tx.send(()).unwrap();

    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("flush task did not stop")
        .unwrap();
}
