//! Common utilities

use serde_json::Value;

/// Text form of a JSON value: strings verbatim, everything else as compact
/// JSON. An absent value renders as `null`.
pub fn value_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => Value::Null.to_string(),
    }
}

/// Parse a command-line value as JSON, falling back to a plain string
pub fn parse_json_or_string(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
