//! Alert creation, resolution, and retention for [`Monitor`]

use super::store::Resolution;
use crate::monitoring::system::Monitor;
use crate::monitoring::types::{Alert, AlertLevel, AlertMetadata};
use crate::utils::error::{MonitorError, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

impl Monitor {
    /// Record a new unresolved alert and mirror it to the sink.
    ///
    /// Returns immediately; the mirror write is queued for the persistence worker.
    pub fn create_alert(
        &self,
        level: AlertLevel,
        title: impl Into<String>,
        message: impl Into<String>,
        metadata: Option<AlertMetadata>,
    ) -> Alert {
        let alert = Alert::new(level, title, message, &self.config.service_name, metadata);
        self.alerts.insert(alert.clone());
        log_alert(&alert);
        self.persist_alert(&alert);
        alert
    }

    /// Resolve the alert with `id`.
    ///
    /// Resolving an already resolved alert returns it unchanged.
    pub fn resolve_alert(&self, id: &str) -> Result<Alert> {
        match self.alerts.resolve(id, Utc::now()) {
            None => Err(MonitorError::not_found(format!("alert {} not found", id))),
            Some(Resolution::Resolved(alert)) => {
                info!(alert_id = %alert.id, "Alert resolved: {}", alert.title);
                self.persist_alert(&alert);
                Ok(alert)
            }
            Some(Resolution::AlreadyResolved(alert)) => {
                debug!(alert_id = %alert.id, "Alert already resolved");
                Ok(alert)
            }
        }
    }

    /// Unresolved alerts
    pub fn get_alerts(&self) -> Vec<Alert> {
        self.alerts.unresolved()
    }

    /// Every alert currently held, resolved or not
    pub fn get_all_alerts(&self) -> Vec<Alert> {
        self.alerts.all()
    }

    /// Drop resolved alerts older than the retention window
    pub fn cleanup_old_alerts(&self) -> usize {
        self.cleanup_old_alerts_at(Utc::now())
    }

    /// Drop alerts resolved more than the retention window before `now`
    pub fn cleanup_old_alerts_at(&self, now: DateTime<Utc>) -> usize {
        // A window reaching before the earliest representable time keeps everything
        let Some(cutoff) = now.checked_sub_signed(self.config.alert_retention()) else {
            return 0;
        };
        let removed = self.alerts.prune_resolved_before(cutoff);
        if removed > 0 {
            debug!("Removed {} resolved alerts older than {}", removed, cutoff);
        }
        removed
    }

    fn persist_alert(&self, alert: &Alert) {
        if let Some(queue) = &self.persistence {
            queue.enqueue(alert.clone());
        }
    }
}

fn log_alert(alert: &Alert) {
    match alert.level {
        AlertLevel::Info => info!(
            alert_id = %alert.id,
            service = %alert.service,
            "[ALERT] {}: {}", alert.title, alert.message
        ),
        AlertLevel::Warning => warn!(
            alert_id = %alert.id,
            service = %alert.service,
            "[ALERT] {}: {}", alert.title, alert.message
        ),
        AlertLevel::Critical => error!(
            alert_id = %alert.id,
            service = %alert.service,
            "[ALERT] {}: {}", alert.title, alert.message
        ),
    }
}
