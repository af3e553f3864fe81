//! Core query types, the normalized log record, and the LogTool trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{LogResult, QueryError};
use crate::source::LogStore;

/// Lookback window used when the caller does not give one.
pub const DEFAULT_LOOKBACK_MINUTES: u32 = 60;

/// Upper bound on formatted lines returned by one search.
pub const MAX_RESULTS: usize = 50;

/// Returned instead of an empty success so callers can tell "nothing
/// matched" apart from a failure.
pub const NO_RESULTS: &str = "No logs found matching that query.";

// ── Query Spec ────────────────────────────────────────────────

/// A validated search request: keyword plus recent time window.
///
/// The keyword is spliced into LogsQL verbatim. Keywords containing `AND`,
/// `OR` or quote characters change the meaning of the query; nothing is
/// escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    keyword: String,
    lookback_minutes: u32,
}

impl QuerySpec {
    pub fn new(keyword: impl Into<String>, lookback_minutes: u32) -> LogResult<Self> {
        let keyword = keyword.into();
        if keyword.trim().is_empty() {
            return Err(QueryError::InvalidQuery(
                "search keyword must not be empty".into(),
            ));
        }
        if lookback_minutes == 0 {
            return Err(QueryError::InvalidQuery(
                "lookback_minutes must be a positive integer".into(),
            ));
        }
        Ok(Self {
            keyword,
            lookback_minutes,
        })
    }

    pub fn with_default_lookback(keyword: impl Into<String>) -> LogResult<Self> {
        Self::new(keyword, DEFAULT_LOOKBACK_MINUTES)
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn lookback_minutes(&self) -> u32 {
        self.lookback_minutes
    }

    /// LogsQL text sent as the `query` parameter.
    pub fn to_logsql(&self) -> String {
        format!("{} AND _time:{}m", self.keyword, self.lookback_minutes)
    }
}

// ── Log Record ────────────────────────────────────────────────

/// One log line normalized from a store record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// `_time` rendered as-is (empty when absent).
    pub timestamp: String,
    /// Emitting pod, or `"unknown"`.
    pub pod_name: String,
    /// `_msg`, or empty.
    pub message: String,
}

impl std::fmt::Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] [{}] {}", self.timestamp, self.pod_name, self.message)
    }
}

// ── Query Result ──────────────────────────────────────────────

/// Formatted display lines, in the order the store returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    lines: Vec<String>,
}

impl QueryResult {
    /// Format records, keeping only the first [`MAX_RESULTS`].
    pub fn from_records(records: impl IntoIterator<Item = LogRecord>) -> Self {
        let lines = records
            .into_iter()
            .take(MAX_RESULTS)
            .map(|r| r.to_string())
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Newline-joined lines, or [`NO_RESULTS`] when nothing matched.
    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            NO_RESULTS.to_string()
        } else {
            self.lines.join("\n")
        }
    }
}

// ── Tool Result ───────────────────────────────────────────────

/// Result of executing a tool. `output` is the text handed back to the
/// reasoning process whether or not the call succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool name that produced this result.
    pub tool_name: String,
    /// Whether the tool execution succeeded.
    pub success: bool,
    /// Text for the calling agent.
    pub output: String,
}

impl ToolResult {
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: output.into(),
        }
    }

    pub fn failure(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: output.into(),
        }
    }
}

impl std::fmt::Display for ToolResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.output)
    }
}

// ── LogTool Trait ─────────────────────────────────────────────

/// Trait for tools exposed to the external reasoning agent.
///
/// `execute` never fails: every error is folded into the returned text.
#[async_trait]
pub trait LogTool: Send + Sync {
    /// Tool name (e.g., "fetch_k8s_logs").
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema describing accepted arguments.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with JSON arguments against a log store.
    async fn execute(&self, args: serde_json::Value, store: &dyn LogStore) -> ToolResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(i: usize) -> LogRecord {
        LogRecord {
            timestamp: format!("2025-01-15T12:00:{i:02}Z"),
            pod_name: "checkout-7f8d".into(),
            message: format!("event {i}"),
        }
    }

    #[test]
    fn logsql_appends_time_window() {
        let spec = QuerySpec::new("error", 15).unwrap();
        assert_eq!(spec.to_logsql(), "error AND _time:15m");
    }

    #[test]
    fn default_lookback_is_sixty() {
        let spec = QuerySpec::with_default_lookback("crash").unwrap();
        assert_eq!(spec.lookback_minutes(), 60);
        assert_eq!(spec.to_logsql(), "crash AND _time:60m");
    }

    #[test]
    fn keyword_is_not_escaped() {
        let spec = QuerySpec::new(r#"error OR "panic""#, 5).unwrap();
        assert_eq!(spec.to_logsql(), r#"error OR "panic" AND _time:5m"#);
    }

    #[test]
    fn empty_keyword_rejected() {
        assert!(matches!(
            QuerySpec::new("", 60),
            Err(QueryError::InvalidQuery(_))
        ));
        assert!(matches!(
            QuerySpec::new("   ", 60),
            Err(QueryError::InvalidQuery(_))
        ));
    }

    #[test]
    fn zero_lookback_rejected() {
        assert!(matches!(
            QuerySpec::new("error", 0),
            Err(QueryError::InvalidQuery(_))
        ));
    }

    #[test]
    fn record_display_format() {
        let line = LogRecord {
            timestamp: "2025-01-15T12:00:05Z".into(),
            pod_name: "checkout-7f8d".into(),
            message: "payment declined".into(),
        }
        .to_string();
        assert_eq!(line, "[2025-01-15T12:00:05Z] [checkout-7f8d] payment declined");
    }

    #[test]
    fn result_truncates_to_first_fifty() {
        let result = QueryResult::from_records((0..120).map(record));
        assert_eq!(result.len(), MAX_RESULTS);
        assert!(result.lines()[0].ends_with("event 0"));
        assert!(result.lines()[49].ends_with("event 49"));
    }

    #[test]
    fn empty_result_renders_sentinel() {
        let result = QueryResult::from_records(Vec::<LogRecord>::new());
        assert!(result.is_empty());
        assert_eq!(result.render(), NO_RESULTS);
    }

    #[test]
    fn render_joins_with_newlines() {
        let result = QueryResult::from_records((0..3).map(record));
        let text = result.render();
        assert_eq!(text.lines().count(), 3);
        assert!(!text.ends_with('\n'));
    }
}
