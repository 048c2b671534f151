//! Monitor integration tests
//!
//! Exercise the monitor through its public API with in-process probes.

#[cfg(test)]
mod tests {
    use crate::common::{ConfigFactory, FailingProbe, StaticProbe};
    use chrono::{Duration as ChronoDuration, Utc};
    use std::sync::Arc;
    use std::time::Duration;
    use storefront_monitor::monitoring::metrics::{ErrorTracker, RequestRecorder};
    use storefront_monitor::storage::StorageLayer;
    use storefront_monitor::{AlertLevel, HealthStatus, Monitor};
    use tokio::sync::broadcast;

    #[tokio::test]
    async fn test_alert_lifecycle_end_to_end() {
        let monitor = Monitor::new(ConfigFactory::quiet());

        let keep = monitor.create_alert(AlertLevel::Warning, "Cart latency", "p95 4.8s", None);
        let done = monitor.create_alert(AlertLevel::Critical, "Order sync", "stalled", None);
        monitor.resolve_alert(&done.id).unwrap();

        let open: Vec<_> = monitor.get_alerts().into_iter().map(|a| a.id).collect();
        assert_eq!(open, vec![keep.id.clone()]);
        assert_eq!(monitor.get_all_alerts().len(), 2);

        let removed = monitor.cleanup_old_alerts_at(Utc::now() + ChronoDuration::hours(25));
        assert_eq!(removed, 1);
        assert_eq!(monitor.get_all_alerts().len(), 1);
        assert_eq!(monitor.get_all_alerts()[0].id, keep.id);
    }

    #[tokio::test]
    async fn test_background_loop_with_failing_cache() {
        let monitor = Monitor::builder(ConfigFactory::quiet())
            .with_database_probe(Arc::new(StaticProbe("db ok")))
            .with_cache_probe(Arc::new(FailingProbe("redis unreachable")))
            .build();
        let (shutdown_tx, _) = broadcast::channel(1);
        let handle = monitor.start_background_tasks(shutdown_tx.subscribe()).unwrap();

        tokio::time::timeout(Duration::from_secs(5), async {
            while monitor.get_metrics().redis_health != "unhealthy" {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("first tick did not complete");

        let metrics = monitor.get_metrics();
        assert_eq!(metrics.database_health, "healthy");
        assert_eq!(metrics.health_checks["redis"].status, HealthStatus::Unhealthy);

        let alerts = monitor.get_alerts();
        assert!(alerts.iter().any(|a| a.title == "redis Health Check Failed"
            && a.level == AlertLevel::Critical));

        shutdown_tx.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_recorder_and_tracker_feed_metrics() {
        let errors = Arc::new(ErrorTracker::new());
        let recorder = RequestRecorder::new();
        let monitor = Monitor::builder(ConfigFactory::quiet())
            .with_error_source(errors.clone())
            .build();

        for (status, user) in [(200, "a"), (200, "b"), (500, "a"), (404, "c")] {
            recorder.record(status, Duration::from_millis(100), Some(user));
            errors.record_status(status);
        }
        recorder.flush_into(&monitor);

        let metrics = monitor.get_metrics();
        assert_eq!(metrics.request_count, 4);
        assert_eq!(metrics.error_count, 1);
        assert_eq!(metrics.error_rate, 25.0);
        assert_eq!(metrics.active_users, 3);
        assert_eq!(metrics.error_breakdown.unwrap().total_errors, 2);
        assert!(monitor
            .get_alerts()
            .iter()
            .any(|a| a.title == "High Error Rate Detected"));
    }

    #[tokio::test]
    async fn test_disconnected_storage_wires_no_probes() {
        let storage = StorageLayer::disconnected();
        let monitor = Monitor::builder(ConfigFactory::quiet())
            .with_storage(&storage)
            .build();

        assert!(monitor.database_probe().is_none());
        assert!(monitor.cache_probe().is_none());

        monitor.run_scheduled_checks().await;
        let metrics = monitor.get_metrics();
        assert_eq!(metrics.database_health, "not_configured");
        assert_eq!(metrics.redis_health, "not_configured");
    }

    #[tokio::test]
    async fn test_many_tasks_create_alerts() {
        let monitor = Monitor::new(ConfigFactory::quiet());
        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let monitor = monitor.clone();
                tokio::spawn(async move {
                    monitor
                        .create_alert(AlertLevel::Info, "burst", format!("event {}", i), None)
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 64);
        assert_eq!(monitor.get_alerts().len(), 64);
    }
}
