//! Log investigation tools for podlens.
//!
//! Queries a VictoriaLogs store for events matching a keyword in a recent
//! time window, normalizes the NDJSON records into display lines, and
//! provides the terminal `report_findings` sink. Both are exposed through
//! the `LogTool` trait as text-in/text-out tools for an external agent.

pub mod error;
pub mod mock;
pub mod parsers;
pub mod source;
pub mod tools;
pub mod types;

// Re-export key types for convenience
pub use error::{LineError, LogResult, QueryError};
pub use mock::MockLogStore;
pub use source::{LogStore, StoreConfig, VictoriaLogsStore};
pub use types::{LogRecord, LogTool, QueryResult, QuerySpec, ToolResult};
