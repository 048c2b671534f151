//! Core monitor implementation

use super::alerts::{AlertSink, AlertStore, PersistQueue, RedisAlertSink};
use super::health::ConnectivityProbe;
use super::metrics::{ErrorMetricsSource, MetricsSnapshot, ThresholdRules};
use crate::config::MonitoringConfig;
use crate::storage::StorageLayer;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

/// Alert store, metrics snapshot, and health checks for one service.
///
/// Cloning is cheap and every clone shares the same state.
#[derive(Clone)]
pub struct Monitor {
    pub(crate) config: Arc<MonitoringConfig>,
    pub(crate) alerts: Arc<AlertStore>,
    pub(crate) metrics: Arc<MetricsSnapshot>,
    pub(crate) thresholds: ThresholdRules,
    pub(crate) persistence: Option<Arc<PersistQueue>>,
    pub(crate) error_source: Option<Arc<dyn ErrorMetricsSource>>,
    pub(crate) database_probe: Option<Arc<dyn ConnectivityProbe>>,
    pub(crate) cache_probe: Option<Arc<dyn ConnectivityProbe>>,
    pub(crate) background_started: Arc<AtomicBool>,
}

impl std::fmt::Debug for Monitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor")
            .field("service", &self.config.service_name)
            .field("alerts", &self.alerts.len())
            .field("persistence", &self.persistence.is_some())
            .field("database_probe", &self.database_probe.is_some())
            .field("cache_probe", &self.cache_probe.is_some())
            .finish()
    }
}

impl Monitor {
    /// Monitor with no sink, no error source, and no probes
    pub fn new(config: MonitoringConfig) -> Self {
        MonitorBuilder::new(config).build()
    }

    pub fn builder(config: MonitoringConfig) -> MonitorBuilder {
        MonitorBuilder::new(config)
    }

    pub fn config(&self) -> &MonitoringConfig {
        &self.config
    }

    pub fn service_name(&self) -> &str {
        &self.config.service_name
    }

    pub fn database_probe(&self) -> Option<Arc<dyn ConnectivityProbe>> {
        self.database_probe.clone()
    }

    pub fn cache_probe(&self) -> Option<Arc<dyn ConnectivityProbe>> {
        self.cache_probe.clone()
    }

    /// Whether both handles share the same underlying state
    pub fn same_instance(&self, other: &Monitor) -> bool {
        Arc::ptr_eq(&self.alerts, &other.alerts)
    }
}

/// Builder wiring optional collaborators into a [`Monitor`]
pub struct MonitorBuilder {
    config: MonitoringConfig,
    sink: Option<Arc<dyn AlertSink>>,
    error_source: Option<Arc<dyn ErrorMetricsSource>>,
    database_probe: Option<Arc<dyn ConnectivityProbe>>,
    cache_probe: Option<Arc<dyn ConnectivityProbe>>,
}

impl MonitorBuilder {
    pub fn new(config: MonitoringConfig) -> Self {
        Self {
            config,
            sink: None,
            error_source: None,
            database_probe: None,
            cache_probe: None,
        }
    }

    pub fn with_alert_sink(mut self, sink: Arc<dyn AlertSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_error_source(mut self, source: Arc<dyn ErrorMetricsSource>) -> Self {
        self.error_source = Some(source);
        self
    }

    pub fn with_database_probe(mut self, probe: Arc<dyn ConnectivityProbe>) -> Self {
        self.database_probe = Some(probe);
        self
    }

    pub fn with_cache_probe(mut self, probe: Arc<dyn ConnectivityProbe>) -> Self {
        self.cache_probe = Some(probe);
        self
    }

    /// Use the storage layer for the database probe, the cache probe, and
    /// the Redis alert mirror
    pub fn with_storage(mut self, storage: &StorageLayer) -> Self {
        if let Some(database) = &storage.database {
            let probe: Arc<dyn ConnectivityProbe> = database.clone();
            self.database_probe = Some(probe);
        }
        if storage.redis.is_noop() {
            return self;
        }
        let cache: Arc<dyn ConnectivityProbe> = storage.redis.clone();
        self.cache_probe = Some(cache);
        self.sink = Some(Arc::new(RedisAlertSink::new(
            Arc::clone(&storage.redis),
            self.config.alert_key_prefix.clone(),
            Duration::from_secs(self.config.alert_retention_secs),
        )));
        self
    }

    pub fn build(self) -> Monitor {
        let alerts = Arc::new(AlertStore::new());
        let deadline = self.config.cache_timeout();
        let persistence = self
            .sink
            .map(|sink| Arc::new(PersistQueue::new(sink, Arc::clone(&alerts), deadline)));
        Monitor {
            thresholds: ThresholdRules::from_config(&self.config),
            config: Arc::new(self.config),
            alerts,
            metrics: Arc::new(MetricsSnapshot::new()),
            persistence,
            error_source: self.error_source,
            database_probe: self.database_probe,
            cache_probe: self.cache_probe,
            background_started: Arc::new(AtomicBool::new(false)),
        }
    }
}
