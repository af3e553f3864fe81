//! Tools exposed to the external reasoning agent.

pub mod fetch_logs;
pub mod report_findings;

pub use fetch_logs::FetchK8sLogs;
pub use report_findings::ReportFindings;

use crate::types::LogTool;

/// Every tool, with the default lookback window.
pub fn all_tools() -> Vec<Box<dyn LogTool>> {
    with_lookback(crate::types::DEFAULT_LOOKBACK_MINUTES)
}

/// Every tool, searching `default_lookback_minutes` back when the caller
/// omits a window.
pub fn with_lookback(default_lookback_minutes: u32) -> Vec<Box<dyn LogTool>> {
    vec![
        Box::new(FetchK8sLogs::new(default_lookback_minutes)),
        Box::new(ReportFindings),
    ]
}
