//! Response body parsing.
//!
//! The store answers with newline-delimited JSON; each line is parsed on its
//! own and lines that do not parse are dropped without failing the query.

pub mod json_lines;

use crate::types::LogRecord;

/// Parse every non-blank line of a response body, in order, skipping lines
/// that are not JSON objects.
pub fn parse_body(body: &str) -> Vec<LogRecord> {
    body.split('\n')
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .filter_map(|(i, line)| match json_lines::parse_line(line) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::trace!(line = i + 1, error = %e, "skipping unparseable log line");
                None
            }
        })
        .collect()
}
