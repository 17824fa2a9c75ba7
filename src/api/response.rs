use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;

pub const NOT_FOUND: &str = "No data found.";
pub const SERVER_ERROR: &str = "An error occurred: server error.";
pub const GENERIC_ERROR: &str = "An error occurred.";
pub const CONNECTION_ERROR: &str = "Connection error.";

/// Outcome of a single API request.
///
/// Remote failures are values, not errors: every request yields exactly one
/// variant and the caller decides how to present it.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Value),
    NotFound,
    ServerError,
    /// Any other non-success status
    Failed(StatusCode),
    /// Success status with a body that is not JSON
    Malformed(String),
    /// The request never produced a response
    ConnectionError(String),
}

impl Lookup {
    /// Maps a received status and body to a lookup result.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        if status.is_success() {
            return match serde_json::from_slice(body) {
                Ok(value) => Lookup::Found(value),
                Err(e) => Lookup::Malformed(e.to_string()),
            };
        }

        match status {
            StatusCode::NOT_FOUND => Lookup::NotFound,
            StatusCode::INTERNAL_SERVER_ERROR => Lookup::ServerError,
            other => Lookup::Failed(other),
        }
    }

    pub fn from_transport_error(err: &reqwest::Error) -> Self {
        Lookup::ConnectionError(err.to_string())
    }

    /// True when the lookup carries no match: a 404, or an empty payload.
    pub fn is_absent(&self) -> bool {
        match self {
            Lookup::NotFound => true,
            Lookup::Found(value) => is_empty_value(value),
            _ => false,
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Lookup::Found(_) | Lookup::NotFound)
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Fixed text shown in place of data, `None` for a successful lookup.
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            Lookup::Found(_) => None,
            Lookup::NotFound => Some(NOT_FOUND),
            Lookup::ServerError => Some(SERVER_ERROR),
            Lookup::Failed(_) | Lookup::Malformed(_) => Some(GENERIC_ERROR),
            Lookup::ConnectionError(_) => Some(CONNECTION_ERROR),
        }
    }

    /// JSON form used by `--format json`; failures become `{"error": ...}`.
    pub fn to_json(&self) -> Value {
        match self {
            Lookup::Found(value) => value.clone(),
            other => serde_json::json!({ "error": other.sentinel().unwrap_or(GENERIC_ERROR) }),
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Found(value) => write!(f, "{}", value),
            other => f.write_str(other.sentinel().unwrap_or(GENERIC_ERROR)),
        }
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(true) => false,
    }
}
