use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned by the wallet service alongside a non-2xx status.
///
/// The service is not consistent here: some routes answer with
/// `{"status": "error", "message": ...}`, others with `{"error": ...}`.
/// Only a string `message` is shown to the user; the other fields are kept
/// untyped so that their shape never hides it.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl ErrorBody {
    /// Parses an error body, tolerating empty or non-JSON payloads.
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// The server-provided message, if it is non-empty.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_ref()
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
    }
}
