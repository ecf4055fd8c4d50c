use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::models::email::ErrorResponse;

/// Errors surfaced to API callers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing email parameter")]
    MissingParameter,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Failure talking to the DNS-over-HTTPS resolver.
///
/// The MX resolver absorbs every variant and reports `mx_valid = false`
/// without caching the outcome.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("DoH request failed: {0}")]
    Transport(String),
    #[error("DoH request timed out")]
    Timeout,
    #[error("DoH resolver answered with HTTP {0}")]
    Status(u16),
    #[error("DoH response is not valid dns-json: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ResolveError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ResolveError::Timeout
        } else if err.is_decode() {
            ResolveError::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            ResolveError::Status(status.as_u16())
        } else {
            ResolveError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("cache entry could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
