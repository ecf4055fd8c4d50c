use super::CacheStore;
use crate::error::CacheError;
use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use std::sync::Arc;
use std::time::Duration;

/// Cache store shared between service instances through Redis.
///
/// Expiry is delegated to Redis via `SET ... EX`.
#[derive(Clone)]
pub struct RedisStore {
    client: Arc<Client>,
}

impl RedisStore {
    /// Parses the URL; no connection is opened until the first command.
    pub fn new(redis_url: &str) -> Result<Self, CacheError> {
        let client = Client::open(redis_url)?;
        Ok(Self {
            client: Arc::new(client),
        })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn put(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        // Redis rejects a zero expiry.
        let seconds = ttl.as_secs().max(1);
        let _: () = conn.set_ex(key, value, seconds).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
