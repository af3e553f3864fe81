//! fetch_k8s_logs — keyword search over recent Kubernetes logs.

use async_trait::async_trait;
use serde_json::json;

use crate::error::{LogResult, QueryError};
use crate::parsers;
use crate::source::LogStore;
use crate::types::{DEFAULT_LOOKBACK_MINUTES, LogTool, QueryResult, QuerySpec, ToolResult};

pub const TOOL_NAME: &str = "fetch_k8s_logs";

/// Run one search: query the store, parse the body, keep the first 50 lines.
pub async fn search(store: &dyn LogStore, spec: &QuerySpec) -> LogResult<QueryResult> {
    let logsql = spec.to_logsql();
    let body = store.query(&logsql).await?;
    let records = parsers::parse_body(&body);
    let parsed = records.len();
    let result = QueryResult::from_records(records);

    tracing::info!(
        query = %logsql,
        parsed,
        returned = result.len(),
        "log search complete"
    );
    Ok(result)
}

/// Fold a search outcome into the text handed to the agent.
pub fn render_outcome(outcome: &LogResult<QueryResult>) -> String {
    match outcome {
        Ok(result) => result.render(),
        Err(e) => e.to_tool_text(),
    }
}

pub struct FetchK8sLogs {
    default_lookback_minutes: u32,
}

impl FetchK8sLogs {
    pub fn new(default_lookback_minutes: u32) -> Self {
        Self {
            default_lookback_minutes,
        }
    }

    fn spec_from_args(&self, args: &serde_json::Value) -> LogResult<QuerySpec> {
        let keyword = args["search_query"]
            .as_str()
            .ok_or_else(|| QueryError::InvalidQuery("missing 'search_query' argument".into()))?;
        let lookback = match &args["lookback_minutes"] {
            serde_json::Value::Null => self.default_lookback_minutes,
            v => v
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| {
                    QueryError::InvalidQuery(format!(
                        "lookback_minutes must be a positive integer, got {v}"
                    ))
                })?,
        };
        QuerySpec::new(keyword, lookback)
    }
}

impl Default for FetchK8sLogs {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKBACK_MINUTES)
    }
}

#[async_trait]
impl LogTool for FetchK8sLogs {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Searches the Kubernetes logs (VictoriaLogs) for specific events"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "search_query": {
                    "type": "string",
                    "description": "The keyword to search for (e.g., 'error', 'checkout', 'crash')"
                },
                "lookback_minutes": {
                    "type": "integer",
                    "minimum": 1,
                    "description": format!(
                        "How many minutes back to search (default: {})",
                        self.default_lookback_minutes
                    ),
                    "default": self.default_lookback_minutes
                }
            },
            "required": ["search_query"]
        })
    }

    async fn execute(&self, args: serde_json::Value, store: &dyn LogStore) -> ToolResult {
        let outcome = match self.spec_from_args(&args) {
            Ok(spec) => search(store, &spec).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "log search failed");
        }

        let text = render_outcome(&outcome);
        if outcome.is_ok() {
            ToolResult::success(TOOL_NAME, text)
        } else {
            ToolResult::failure(TOOL_NAME, text)
        }
    }
}
