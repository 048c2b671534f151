//! Basic Redis cache operations

use super::pool::RedisPool;
use crate::utils::error::{MonitorError, Result};
use redis::{AsyncCommands, RedisResult};

impl RedisPool {
    /// Get a value from cache
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.noop_mode {
            return Ok(None);
        }

        let mut conn = self.get_connection().await?;
        if let Some(ref mut c) = conn.conn {
            let result: RedisResult<Option<String>> = c.get(key).await;
            result.map_err(MonitorError::Redis)
        } else {
            Ok(None)
        }
    }

    /// Set a key-value pair with optional TTL in seconds
    pub async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> Result<()> {
        if self.noop_mode {
            return Ok(());
        }

        let mut conn = self.get_connection().await?;
        if let Some(ref mut c) = conn.conn {
            if let Some(ttl_seconds) = ttl {
                let _: () = c
                    .set_ex(key, value, ttl_seconds)
                    .await
                    .map_err(MonitorError::Redis)?;
            } else {
                let _: () = c.set(key, value).await.map_err(MonitorError::Redis)?;
            }
        }
        Ok(())
    }
}
