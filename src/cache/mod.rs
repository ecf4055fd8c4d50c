//! Key-value stores backing the MX cache.
//!
//! The resolver only sees [`CacheStore`]; each implementation is responsible
//! for its own synchronisation and for expiring entries once their TTL has
//! elapsed.

mod memory;
mod redis;

pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

use crate::config::AppConfig;
use crate::error::CacheError;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;
use std::time::Duration;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the stored value, or `None` when the key is absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value` under `key`, fully replacing any previous entry.
    async fn put(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}

/// Picks Redis when `REDIS_URL` is configured, the in-process store otherwise.
pub fn build_store(config: &AppConfig) -> Result<Arc<dyn CacheStore>, CacheError> {
    match &config.redis_url {
        Some(url) => {
            tracing::info!("MX cache backed by redis");
            Ok(Arc::new(RedisStore::new(url)?))
        }
        None => {
            tracing::info!(
                max_entries = config.cache_max_entries,
                "MX cache backed by in-memory store"
            );
            Ok(Arc::new(MemoryStore::new(config.cache_max_entries)))
        }
    }
}
