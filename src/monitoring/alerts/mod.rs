//! Alert management
//!
//! Alerts live in an in-memory store owned by the [`Monitor`](super::Monitor)
//! and are mirrored best-effort to an [`AlertSink`].

mod lifecycle;
mod persistence;
mod store;


pub(crate) use persistence::PersistQueue;
pub use persistence::{AlertSink, RedisAlertSink};
pub use store::{AlertStore, Resolution};

#[cfg(test)]
pub(crate) use persistence::MockAlertSink;
