//! Tool registry: name lookup, listing and dispatch.
//!
//! The host uses this to resolve tool calls coming from the orchestrator
//! and to publish the tool catalog it advertises to the agent.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::json;

use pl_log_tools::{LogStore, LogTool, StoreConfig, ToolResult};

/// Metadata about a registered tool (used by the tool catalog).
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Registry of agent-facing tools, indexed by name.
pub struct ToolRegistry {
    tools: Vec<Box<dyn LogTool>>,
    /// Map from tool name → index into `tools`.
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Box<dyn LogTool>>) -> Self {
        let index = tools
            .iter()
            .enumerate()
            .map(|(i, tool)| (tool.name().to_string(), i))
            .collect();
        Self { tools, index }
    }

    /// Build with every tool at the default lookback window.
    pub fn with_defaults() -> Self {
        Self::new(pl_log_tools::tools::all_tools())
    }

    /// Build with the store's configured default lookback window.
    pub fn from_store_config(config: &StoreConfig) -> Self {
        Self::new(pl_log_tools::tools::with_lookback(
            config.default_lookback_minutes,
        ))
    }

    pub fn lookup(&self, name: &str) -> Option<&dyn LogTool> {
        self.index.get(name).map(|&i| self.tools[i].as_ref())
    }

    /// Execute a tool by name. Unknown names come back as error text, like
    /// every other failure on the tool channel.
    pub async fn execute(
        &self,
        name: &str,
        args: serde_json::Value,
        store: &dyn LogStore,
    ) -> ToolResult {
        match self.lookup(name) {
            Some(tool) => {
                tracing::debug!(tool = name, "dispatching tool call");
                tool.execute(args, store).await
            }
            None => {
                tracing::warn!(tool = name, "unknown tool requested");
                ToolResult::failure(name, format!("Error: unknown tool '{name}'"))
            }
        }
    }

    /// List all registered tools with metadata, in registration order.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        self.tools
            .iter()
            .map(|tool| ToolInfo {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters_schema(),
            })
            .collect()
    }

    /// Tool catalog as JSON, for handing to the orchestrator.
    pub fn catalog(&self) -> serde_json::Value {
        json!({ "tools": self.list_tools() })
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
