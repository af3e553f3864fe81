//! Log store abstraction — run a LogsQL query against VictoriaLogs, a mock,
//! or another backend, and hand back the raw NDJSON body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{LogResult, QueryError};

/// Abstraction over the queryable log backend.
///
/// One call is one outbound request; implementations keep no state between
/// calls.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Run a LogsQL query and return the response body (NDJSON).
    async fn query(&self, logsql: &str) -> LogResult<String>;
}

/// Connection settings for a VictoriaLogs instance.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the log store, e.g. `http://victorialogs:9428`.
    pub base_url: String,
    /// Search endpoint path appended to `base_url`.
    #[serde(default = "default_search_path")]
    pub search_path: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Lookback used when a caller omits it.
    #[serde(default = "default_lookback_minutes")]
    pub default_lookback_minutes: u32,
}

fn default_search_path() -> String {
    "/select/logsql/query".into()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_lookback_minutes() -> u32 {
    crate::types::DEFAULT_LOOKBACK_MINUTES
}

impl StoreConfig {
    /// Config for `base_url` with every other field at its default.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            search_path: default_search_path(),
            timeout_secs: default_timeout_secs(),
            default_lookback_minutes: default_lookback_minutes(),
        }
    }

    /// Full search endpoint URL.
    pub fn search_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.search_path
        )
    }
}

/// Queries VictoriaLogs over HTTP.
pub struct VictoriaLogsStore {
    client: reqwest::Client,
    url: String,
}

impl VictoriaLogsStore {
    pub fn new(config: &StoreConfig) -> LogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: config.search_url(),
        })
    }
}

#[async_trait]
impl LogStore for VictoriaLogsStore {
    async fn query(&self, logsql: &str) -> LogResult<String> {
        tracing::debug!(url = %self.url, query = %logsql, "querying log store");

        let response = self
            .client
            .get(&self.url)
            .query(&[("query", logsql)])
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "log store request failed"))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = %status, "log store returned non-200");
            return Err(QueryError::BackendStatus(status.as_u16()));
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "log store response received");
        Ok(body)
    }
}
