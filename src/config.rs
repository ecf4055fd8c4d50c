use crate::error::ConfigError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DOH_ENDPOINT: &str = "https://cloudflare-dns.com/dns-query";

/// MX results are kept for one hour, positive or negative.
pub const DEFAULT_MX_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Longest accepted `MX_CACHE_TTL_SECS`, one year.
pub const MAX_MX_CACHE_TTL_SECS: u64 = 365 * 24 * 3600;

/// Longest accepted `DOH_TIMEOUT_SECS`.
pub const MAX_DOH_TIMEOUT_SECS: u64 = 300;

/// Runtime settings, read from the environment (and `.env` when present).
///
/// | Variable | Default |
/// |---|---|
/// | `HOST` | `127.0.0.1` |
/// | `PORT` | `8080` |
/// | `DOH_ENDPOINT` | `https://cloudflare-dns.com/dns-query` |
/// | `DOH_TIMEOUT_SECS` | `5` (1..=300) |
/// | `MX_CACHE_TTL_SECS` | `3600` (1..=31536000) |
/// | `CACHE_MAX_ENTRIES` | `10000` |
/// | `REDIS_URL` | unset, in-memory cache |
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub doh_endpoint: String,
    pub doh_timeout: Duration,
    pub mx_cache_ttl: Duration,
    pub cache_max_entries: u64,
    pub redis_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            doh_endpoint: DEFAULT_DOH_ENDPOINT.to_string(),
            doh_timeout: Duration::from_secs(5),
            mx_cache_ttl: DEFAULT_MX_CACHE_TTL,
            cache_max_entries: 10_000,
            redis_url: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or(get("PORT"), "PORT", defaults.port)?,
            doh_endpoint: get("DOH_ENDPOINT").unwrap_or(defaults.doh_endpoint),
            doh_timeout: parse_secs(
                get("DOH_TIMEOUT_SECS"),
                "DOH_TIMEOUT_SECS",
                defaults.doh_timeout,
                MAX_DOH_TIMEOUT_SECS,
            )?,
            mx_cache_ttl: parse_secs(
                get("MX_CACHE_TTL_SECS"),
                "MX_CACHE_TTL_SECS",
                defaults.mx_cache_ttl,
                MAX_MX_CACHE_TTL_SECS,
            )?,
            cache_max_entries: parse_or(
                get("CACHE_MAX_ENTRIES"),
                "CACHE_MAX_ENTRIES",
                defaults.cache_max_entries,
            )?,
            redis_url: get("REDIS_URL"),
        })
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

// Whole seconds in `1..=max`. Zero would disable the timeout or the cache entry.
fn parse_secs(
    raw: Option<String>,
    key: &'static str,
    default: Duration,
    max: u64,
) -> Result<Duration, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.trim().parse::<u64>() {
        Ok(secs) if (1..=max).contains(&secs) => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid { key, value }),
    }
}
