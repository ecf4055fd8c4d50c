//! MX verification.
//!
//! [`MxResolver`] answers "does this domain publish MX records?" by consulting
//! a [`crate::cache::CacheStore`] first and an [`MxLookup`] (normally
//! [`DohClient`]) on a miss.

mod doh;
mod resolver;

pub use doh::{DNS_JSON, DohAnswer, DohClient, DohResponse};
pub use resolver::{MxCacheEntry, MxResolver};

use crate::error::ResolveError;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Upstream source of MX information.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MxLookup: Send + Sync {
    /// `Ok(true)` when the answer section for `domain`'s MX query is non-empty.
    async fn has_mx_records(&self, domain: &str) -> Result<bool, ResolveError>;
}
