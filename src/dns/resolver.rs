use super::MxLookup;
use crate::cache::CacheStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Value stored under `mx_<domain>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxCacheEntry {
    pub mx_valid: bool,
}

/// Cached MX verification.
///
/// A lookup result is written back for `ttl` whether it is positive or
/// negative, so a domain that gains MX records may keep reporting `false`
/// until its entry expires. Upstream failures are reported as `false` and
/// never cached.
///
/// Concurrent misses on the same domain each query upstream; the last write
/// wins in the store.
#[derive(Clone)]
pub struct MxResolver {
    cache: Arc<dyn CacheStore>,
    lookup: Arc<dyn MxLookup>,
    ttl: Duration,
}

impl MxResolver {
    pub fn new(cache: Arc<dyn CacheStore>, lookup: Arc<dyn MxLookup>, ttl: Duration) -> Self {
        Self { cache, lookup, ttl }
    }

    pub fn cache_key(domain: &str) -> String {
        format!("mx_{}", domain)
    }

    pub fn cache_backend(&self) -> &'static str {
        self.cache.backend()
    }

    /// Whether `domain` publishes MX records. Never fails: any upstream
    /// problem degrades to `false`.
    pub async fn resolve_mx(&self, domain: &str) -> bool {
        let key = Self::cache_key(domain);

        if let Some(mx_valid) = self.cached(&key).await {
            debug!(domain, mx_valid, "MX cache hit");
            return mx_valid;
        }
        debug!(domain, "MX cache miss");

        match self.lookup.has_mx_records(domain).await {
            Ok(mx_valid) => {
                self.store(&key, mx_valid).await;
                mx_valid
            }
            Err(e) => {
                warn!(domain, error = %e, "MX lookup failed, reporting no MX records");
                false
            }
        }
    }

    // Read errors and undecodable entries behave like a miss.
    async fn cached(&self, key: &str) -> Option<bool> {
        let raw = match self.cache.get(key).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key, error = %e, "MX cache read failed");
                return None;
            }
        };

        match serde_json::from_str::<MxCacheEntry>(&raw) {
            Ok(entry) => Some(entry.mx_valid),
            Err(e) => {
                warn!(key, error = %e, "discarding undecodable MX cache entry");
                None
            }
        }
    }

    async fn store(&self, key: &str, mx_valid: bool) {
        let value = match serde_json::to_string(&MxCacheEntry { mx_valid }) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "could not encode MX cache entry");
                return;
            }
        };

        if let Err(e) = self.cache.put(key, value, self.ttl).await {
            warn!(key, error = %e, "MX cache write failed");
        }
    }
}
