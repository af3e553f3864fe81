//! Mock log store for testing — serves a canned reply and records queries.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::{LogResult, QueryError};
use crate::source::LogStore;

/// What the mock answers with.
#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Status(u16),
    Unreachable(String),
}

/// A mock log store that answers every query with the same reply.
pub struct MockLogStore {
    reply: Reply,
    queries: Mutex<Vec<String>>,
}

impl MockLogStore {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Answer with an NDJSON body.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self::with_reply(Reply::Body(body.into()))
    }

    /// Answer with these lines joined by newlines.
    pub fn with_lines(lines: &[&str]) -> Self {
        Self::with_body(lines.join("\n"))
    }

    /// Answer with a non-success HTTP status.
    pub fn with_status(code: u16) -> Self {
        Self::with_reply(Reply::Status(code))
    }

    /// Fail as if the store could not be reached.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Unreachable(message.into()))
    }

    /// Sample of Kubernetes logs in both flat and nested shapes, with a
    /// malformed line in the middle.
    pub fn with_k8s_sample() -> Self {
        Self::with_lines(&[
            r#"{"_time":"2025-01-15T12:00:01Z","_msg":"checkout request failed: upstream timeout","kubernetes.pod_name":"checkout-7f8d"}"#,
            r#"{"_time":"2025-01-15T12:00:03Z","_msg":"connection pool exhausted","kubernetes":{"pod_name":"payments-5c9b","namespace":"shop"}}"#,
            r#"{"_time":"2025-01-15T12:00:04Z","_msg":"truncated"#,
            r#"{"_time":"2025-01-15T12:00:07Z","_msg":"error: node pressure eviction"}"#,
            "",
            r#"{"_time":"2025-01-15T12:00:09Z","_msg":"OOMKilled","kubernetes.pod_name":"cart-66d4"}"#,
        ])
    }

    /// Queries received so far, oldest first.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LogStore for MockLogStore {
    async fn query(&self, logsql: &str) -> LogResult<String> {
        if let Ok(mut q) = self.queries.lock() {
            q.push(logsql.to_string());
        }
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status(code) => Err(QueryError::BackendStatus(*code)),
            Reply::Unreachable(msg) => Err(QueryError::ConnectionFailure(msg.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_serves_body_and_records_query() {
        let store = MockLogStore::with_body("{}");
        let body = store.query("error AND _time:60m").await.unwrap();
        assert_eq!(body, "{}");
        assert_eq!(store.queries(), vec!["error AND _time:60m"]);
    }

    #[tokio::test]
    async fn mock_status() {
        let store = MockLogStore::with_status(500);
        assert!(matches!(
            store.query("x").await,
            Err(QueryError::BackendStatus(500))
        ));
    }

    #[tokio::test]
    async fn mock_unreachable() {
        let store = MockLogStore::unreachable("connection refused");
        assert!(matches!(
            store.query("x").await,
            Err(QueryError::ConnectionFailure(_))
        ));
    }
}
