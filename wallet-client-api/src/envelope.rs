use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// HTTP status codes the wallet service is known to answer with.
/// This is WASM-compatible and doesn't depend on any HTTP crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    Ok = 200,
    Created = 201,
    NoContent = 204,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    Conflict = 409,
    UnprocessableEntity = 422,
    InternalServerError = 500,
}

impl StatusCode {
    /// Maps a raw status to a known code, `None` for anything else.
    pub fn from_u16(code: u16) -> Option<Self> {
        let status = match code {
            200 => Self::Ok,
            201 => Self::Created,
            204 => Self::NoContent,
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            422 => Self::UnprocessableEntity,
            500 => Self::InternalServerError,
            _ => return None,
        };
        Some(status)
    }

    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Uniform JSON wrapper returned by every wallet endpoint.
///
/// A truthy `error` field signals a logical failure even when the HTTP status
/// is 200, whatever its JSON type. Top-level fields outside of `data`, `message` and `error` (for
/// instance `transaction_id` after a transfer) are kept in `extra`.
///
/// # Examples
///
/// ```rust
/// use wallet_client_api::Envelope;
///
/// let envelope: Envelope =
///     serde_json::from_str(r#"{"message":"Transfer initiated successfully","transaction_id":7}"#)
///         .unwrap();
/// assert!(envelope.error().is_none());
/// assert_eq!(envelope.extra["transaction_id"], 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Envelope {
    /// Envelope carrying only a payload
    pub fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// The logical error when `error` is truthy. Strings are returned as-is,
    /// other values as their JSON text.
    pub fn error(&self) -> Option<String> {
        match self.error.as_ref().filter(|e| is_truthy(e))? {
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    /// The informational message, if it is a non-empty string.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_ref()
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
    }

    /// `data.access_token` when present as a non-empty string.
    pub fn access_token(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.get("access_token"))
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
    }

    /// Decodes the nested `data` payload into a typed value.
    ///
    /// # Errors
    ///
    /// Returns an error when `data` is absent or does not match `T`.
    pub fn decode_data<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let data = self.data.clone().unwrap_or(Value::Null);
        serde_json::from_value(data)
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
