//! In-memory alert store

use crate::monitoring::types::Alert;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Result of resolving an alert that exists in the store
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The alert transitioned from unresolved to resolved
    Resolved(Alert),
    /// The alert was already resolved; nothing changed
    AlreadyResolved(Alert),
}

impl Resolution {
    /// Whether this call performed the transition
    pub fn is_new(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn into_alert(self) -> Alert {
        match self {
            Resolution::Resolved(alert) | Resolution::AlreadyResolved(alert) => alert,
        }
    }
}

/// Alert records keyed by id, guarded by a single reader/writer lock
#[derive(Debug, Default)]
pub struct AlertStore {
    alerts: RwLock<HashMap<String, Alert>>,
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an alert, replacing any record with the same id
    pub fn insert(&self, alert: Alert) {
        self.alerts.write().insert(alert.id.clone(), alert);
    }

    pub fn get(&self, id: &str) -> Option<Alert> {
        self.alerts.read().get(id).cloned()
    }

    /// Resolve the alert with `id` at `at`.
    ///
    /// Returns `None` if no such alert exists.
    pub fn resolve(&self, id: &str, at: DateTime<Utc>) -> Option<Resolution> {
        let mut alerts = self.alerts.write();
        let alert = alerts.get_mut(id)?;
        if alert.resolve(at) {
            Some(Resolution::Resolved(alert.clone()))
        } else {
            Some(Resolution::AlreadyResolved(alert.clone()))
        }
    }

    /// Copies of every unresolved alert
    pub fn unresolved(&self) -> Vec<Alert> {
        self.alerts
            .read()
            .values()
            .filter(|alert| !alert.resolved)
            .cloned()
            .collect()
    }

    /// Copies of every alert
    pub fn all(&self) -> Vec<Alert> {
        self.alerts.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.alerts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.read().is_empty()
    }

    /// Remove resolved alerts whose resolution time is before `cutoff`.
    ///
    /// Unresolved alerts are never removed. Returns the number removed.
    pub fn prune_resolved_before(&self, cutoff: DateTime<Utc>) -> usize {
        let mut alerts = self.alerts.write();
        let before = alerts.len();
        alerts.retain(|_, alert| !alert.resolved_before(cutoff));
        before - alerts.len()
    }
}
