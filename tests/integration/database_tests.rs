//! Database integration tests
//!
//! Uses a real in-memory SQLite database through SeaORM.

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use crate::common::TestDatabase;
    use crate::common::database::test_db_config;
    use std::sync::Arc;
    use storefront_monitor::monitoring::health::{ConnectivityProbe, DATABASE_CHECK};
    use storefront_monitor::storage::database::{Database, DatabaseBackendType};
    use storefront_monitor::{HealthStatus, Monitor, MonitoringConfig};

    /// Test basic database connection and ping
    #[tokio::test]
    async fn test_database_ping() {
        let db = TestDatabase::new().await;
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);

        let ping = db.db().ping().await;
        assert!(ping.is_ok(), "Ping failed: {:?}", ping.err());
    }

    /// Test the database as a connectivity probe
    #[tokio::test]
    async fn test_database_probe_message() {
        let db = TestDatabase::new().await;
        let message = crate::assert_ok!(db.db().check().await);
        assert!(message.contains("healthy"));
    }

    /// Test the background tick against a live database
    #[tokio::test]
    async fn test_scheduled_check_with_database() {
        let db = TestDatabase::new().await;
        let probe: Arc<dyn ConnectivityProbe> = db.db_arc();
        let monitor = Monitor::builder(MonitoringConfig::default())
            .with_database_probe(probe)
            .build();

        monitor.run_scheduled_checks().await;

        let metrics = monitor.get_metrics();
        assert_eq!(metrics.database_health, "healthy");
        assert_eq!(metrics.redis_health, "not_configured");
        assert_eq!(
            metrics.health_checks[DATABASE_CHECK].status,
            HealthStatus::Healthy
        );
        assert!(monitor.get_alerts().is_empty());
    }

    /// Test closing the database connection
    #[tokio::test]
    async fn test_close_database() {
        let db = Database::new(&test_db_config()).await.unwrap();
        assert!(db.close().await.is_ok());
    }
}
