//! report_findings — terminal sink for the agent's final summary.
//!
//! The returned text is a directive to the calling agent: the task is done
//! and the tool must not be invoked again. Stopping the agent loop is the
//! orchestrator's job; this tool only hands back the fixed payload.

use async_trait::async_trait;
use serde_json::json;

use crate::source::LogStore;
use crate::types::{LogTool, ToolResult};

pub const TOOL_NAME: &str = "report_findings";

/// Fixed completion payload returned for every report.
pub const REPORT_ACK: &str = "SYSTEM NOTICE: Analysis delivered. TASK COMPLETE. \
Do not call this tool again. Output the single word 'DONE' to finish.";

/// Accept a summary and return [`REPORT_ACK`]. Any text is accepted.
pub fn report(summary: &str) -> &'static str {
    tracing::info!(summary_len = summary.len(), "findings reported");
    tracing::debug!(summary = %summary, "findings summary");
    REPORT_ACK
}

pub struct ReportFindings;

#[async_trait]
impl LogTool for ReportFindings {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Use this tool to submit your final analysis to the user"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "summary": {
                    "type": "string",
                    "description": "Final analysis of the investigated logs"
                }
            },
            "required": ["summary"]
        })
    }

    async fn execute(&self, args: serde_json::Value, _store: &dyn LogStore) -> ToolResult {
        // Non-string or missing summaries are still acknowledged.
        let summary = match &args["summary"] {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        };
        ToolResult::success(TOOL_NAME, report(&summary))
    }
}
