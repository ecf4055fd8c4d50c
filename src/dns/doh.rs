use super::MxLookup;
use crate::error::ResolveError;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Media type of the JSON flavour of DNS-over-HTTPS.
pub const DNS_JSON: &str = "application/dns-json";

/// Body of a dns-json response. Only `Answer` is acted upon.
#[derive(Debug, Deserialize, Default)]
pub struct DohResponse {
    #[serde(rename = "Status", default)]
    pub status: Option<u32>,
    #[serde(rename = "Answer", default)]
    pub answer: Option<Vec<DohAnswer>>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct DohAnswer {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub record_type: u16,
    #[serde(rename = "TTL", default)]
    pub ttl: u32,
    #[serde(default)]
    pub data: String,
}

impl DohResponse {
    pub fn has_answers(&self) -> bool {
        self.answer.as_ref().is_some_and(|records| !records.is_empty())
    }
}

/// DNS-over-HTTPS client issuing `type=MX` queries against a JSON endpoint
/// such as `https://cloudflare-dns.com/dns-query`.
#[derive(Clone)]
pub struct DohClient {
    http: HttpClient,
    endpoint: String,
}

impl DohClient {
    /// `timeout` bounds the whole exchange, body included.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ResolveError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ResolveError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub async fn query_mx(&self, domain: &str) -> Result<DohResponse, ResolveError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("name", domain), ("type", "MX")])
            .header(ACCEPT, DNS_JSON)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Status(status.as_u16()));
        }

        let body: DohResponse = response.json().await?;
        debug!(
            domain,
            rcode = ?body.status,
            answers = body.answer.as_ref().map_or(0, Vec::len),
            "DoH MX answer"
        );
        Ok(body)
    }
}

#[async_trait]
impl MxLookup for DohClient {
    async fn has_mx_records(&self, domain: &str) -> Result<bool, ResolveError> {
        Ok(self.query_mx(domain).await?.has_answers())
    }
}
