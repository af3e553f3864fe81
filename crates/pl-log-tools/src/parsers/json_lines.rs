//! VictoriaLogs newline-delimited JSON record parser.

use serde_json::{Map, Value};

use crate::error::LineError;
use crate::types::LogRecord;

/// Flat field VictoriaLogs emits for Kubernetes-collected logs.
const FLAT_POD_KEY: &str = "kubernetes.pod_name";
/// Parent object used by collectors that keep the metadata nested.
const NESTED_POD_PARENT: &str = "kubernetes";
const NESTED_POD_KEY: &str = "pod_name";

const MESSAGE_KEY: &str = "_msg";
const TIME_KEY: &str = "_time";

/// Pod name used when neither the flat nor the nested field is present.
pub const UNKNOWN_POD: &str = "unknown";

/// Parse a single NDJSON line into a LogRecord.
pub fn parse_line(line: &str) -> Result<LogRecord, LineError> {
    let obj: Value = serde_json::from_str(line)?;
    let map = obj.as_object().ok_or(LineError::NotAnObject)?;

    Ok(LogRecord {
        timestamp: map.get(TIME_KEY).map(render_value).unwrap_or_default(),
        pod_name: pod_identity(map).unwrap_or_else(|| UNKNOWN_POD.to_string()),
        message: map.get(MESSAGE_KEY).map(render_value).unwrap_or_default(),
    })
}

/// Look up the emitting pod: flat `kubernetes.pod_name` first, then
/// `kubernetes: {pod_name}`. Null and empty values count as absent.
pub fn pod_identity(map: &Map<String, Value>) -> Option<String> {
    present(map.get(FLAT_POD_KEY)).or_else(|| {
        map.get(NESTED_POD_PARENT)
            .and_then(Value::as_object)
            .and_then(|nested| present(nested.get(NESTED_POD_KEY)))
    })
}

fn present(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(render_value(other)),
    }
}

/// Strings verbatim, anything else as its JSON text.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
