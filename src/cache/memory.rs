use super::CacheStore;
use crate::error::CacheError;
use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expires every entry `ttl` after its latest write.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(&self, _key: &String, entry: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(entry.ttl)
    }

    // An overwrite starts a fresh TTL window.
    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// In-process cache store.
///
/// moka tracks each entry's deadline and never returns an expired entry.
/// Deadlines saturate, so an arbitrarily long `ttl` just means "never".
/// Capacity is bounded and moka evicts the least useful entries beyond it.
#[derive(Clone)]
pub struct MemoryStore {
    entries: Cache<String, Entry>,
}

impl MemoryStore {
    pub fn new(max_entries: u64) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(max_entries)
                .expire_after(PerEntryTtl)
                .build(),
        }
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.get(key).await.map(|entry| entry.value))
    }

    async fn put(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        self.entries.insert(key.to_string(), Entry { value, ttl }).await;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
