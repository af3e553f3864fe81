//! Query and per-line parse error types.

use thiserror::Error;

/// Whole-call failure of a log store query.
///
/// Every variant is converted to plain text at the tool boundary; callers of
/// the tools never branch on it.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The log store answered with a status other than 200.
    #[error("Database returned status {0}")]
    BackendStatus(u16),

    /// Transport-level fault: refused, timeout, DNS, TLS, truncated body.
    #[error("{0}")]
    ConnectionFailure(String),

    /// Rejected locally before any request was made.
    #[error("{0}")]
    InvalidQuery(String),
}

impl QueryError {
    /// Render the error the way the tool channel reports it.
    pub fn to_tool_text(&self) -> String {
        match self {
            Self::ConnectionFailure(msg) => format!("Connection Failed: {msg}"),
            Self::BackendStatus(_) | Self::InvalidQuery(_) => format!("Error: {self}"),
        }
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(e: reqwest::Error) -> Self {
        Self::ConnectionFailure(e.to_string())
    }
}

/// Why a single NDJSON line was dropped. Never surfaced to tool callers.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line is valid JSON but not an object")]
    NotAnObject,
}

/// Convenience alias for query results.
pub type LogResult<T> = Result<T, QueryError>;
