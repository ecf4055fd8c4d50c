pub mod cache;
pub mod config;
pub mod dns;
pub mod error;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod telemetry;
pub mod validation;

use crate::config::AppConfig;
use crate::dns::{DohClient, MxResolver};
use std::sync::Arc;

/// Wires the MX resolver from configuration: the selected cache store plus a
/// DoH client bounded by the configured timeout.
pub fn build_resolver(config: &AppConfig) -> std::io::Result<MxResolver> {
    let cache = cache::build_store(config).map_err(std::io::Error::other)?;
    let lookup = DohClient::new(config.doh_endpoint.clone(), config.doh_timeout)
        .map_err(std::io::Error::other)?;

    Ok(MxResolver::new(cache, Arc::new(lookup), config.mx_cache_ttl))
}
