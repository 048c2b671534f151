//! Storage layer for the monitor
//!
//! Holds the database and Redis handles the health checks ping and the
//! alert mirror writes to.

/// Database storage module
pub mod database;
/// Redis cache module
pub mod redis;

use crate::config::StorageConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Storage backends shared by the monitor and the HTTP layer
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection pool (None when the database check is disabled)
    pub database: Option<Arc<database::Database>>,
    /// Redis connection pool (no-op when Redis is disabled)
    pub redis: Arc<redis::RedisPool>,
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        let database = if config.database.enabled {
            debug!("Connecting to database");
            Some(Arc::new(database::Database::new(&config.database).await?))
        } else {
            debug!("Database disabled, skipping database connection");
            None
        };

        let redis = if config.redis.enabled {
            debug!("Connecting to Redis");
            let pool = redis::RedisPool::new(&config.redis).await?;
            info!("Redis connected at {}", pool.display_url());
            Arc::new(pool)
        } else {
            debug!("Redis disabled, using no-op pool");
            Arc::new(redis::RedisPool::create_noop())
        };

        info!("Storage layer initialized successfully");
        Ok(Self { database, redis })
    }

    /// Storage layer with no database and a no-op Redis pool
    pub fn disconnected() -> Self {
        Self {
            database: None,
            redis: Arc::new(redis::RedisPool::create_noop()),
        }
    }
}
