//! Outbound request descriptor and the pre-request transform.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::ClientError;
use crate::session::Session;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";

const BEARER: &str = "Bearer ";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Everything needed to issue one call. Only headers are touched by
/// [`prepare`]; nothing is mutated once the request is dispatched.
///
/// Builder methods never fail: a body, query or header that cannot be
/// encoded marks the descriptor invalid, and [`prepare`] then rejects it as a
/// configuration error so that it is reported like any other failed call.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
    invalid: Option<String>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: HeaderMap::new(),
            body: None,
            query: Vec::new(),
            invalid: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    /// Sets the JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(value),
            Err(err) => self.reject(format!("request body is not serializable: {err}")),
        }
        self
    }

    /// Appends query parameters from a flat serializable struct or map.
    /// Absent (`null`) fields are skipped.
    pub fn query<T: Serialize>(mut self, params: &T) -> Self {
        let fields = match serde_json::to_value(params) {
            Ok(Value::Object(fields)) => fields,
            Ok(_) => {
                self.reject("query parameters must be an object".to_string());
                return self;
            }
            Err(err) => {
                self.reject(format!("query parameters are not serializable: {err}"));
                return self;
            }
        };

        for (key, value) in fields {
            let value = match value {
                Value::Null => continue,
                Value::String(text) => text,
                other => other.to_string(),
            };
            self.query.push((key, value));
        }
        self
    }

    pub fn header(mut self, name: HeaderName, value: &str) -> Self {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.headers.insert(name, value);
            }
            Err(_) => self.reject(format!("invalid value for header {name}")),
        }
        self
    }

    /// Why the descriptor cannot be dispatched, if it cannot.
    pub fn invalid_reason(&self) -> Option<&str> {
        self.invalid.as_deref()
    }

    fn reject(&mut self, reason: String) {
        self.invalid.get_or_insert(reason);
    }

    pub fn is_login(&self) -> bool {
        self.url.contains(LOGIN_ENDPOINT)
    }

    pub fn is_register(&self) -> bool {
        self.url.contains(REGISTER_ENDPOINT)
    }

    /// Login and registration are the only calls sent without a token.
    pub fn is_auth_exempt(&self) -> bool {
        self.is_login() || self.is_register()
    }
}

/// `Authorization` value for a stored token, keeping an existing scheme.
pub fn bearer_value(token: &str) -> String {
    if token.starts_with(BEARER) {
        token.to_string()
    } else {
        format!("{BEARER}{token}")
    }
}

/// Pre-request transform: forces the JSON content type and attaches the
/// stored token to every call except login and registration.
///
/// # Errors
/// Returns a configuration error when the descriptor was marked invalid or the
/// stored token is not a valid header value.
pub fn prepare(
    mut descriptor: RequestDescriptor,
    session: &Session,
) -> Result<RequestDescriptor, ClientError> {
    if let Some(reason) = descriptor.invalid_reason() {
        tracing::error!(url = %descriptor.url, reason, "Malformed request descriptor");
        return Err(ClientError::configuration());
    }

    descriptor
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    if descriptor.is_auth_exempt() {
        tracing::debug!(url = %descriptor.url, "Skipping token for auth endpoint");
        return Ok(descriptor);
    }

    match session.token() {
        Some(token) => {
            let mut value = HeaderValue::from_str(&bearer_value(&token)).map_err(|_| {
                tracing::error!(url = %descriptor.url, "Stored token is not a valid header value");
                ClientError::configuration()
            })?;
            value.set_sensitive(true);
            descriptor.headers.insert(AUTHORIZATION, value);
        }
        None => {
            tracing::warn!(url = %descriptor.url, "No token found for protected endpoint");
        }
    }

    Ok(descriptor)
}

/// Resolves `target` against the base URL. Absolute URLs are kept as-is;
/// relative paths are joined with exactly one slash.
///
/// # Errors
/// Returns a configuration error when the result is not a valid URL.
pub fn resolve_url(base: &Url, target: &str) -> Result<Url, ClientError> {
    if let Ok(absolute) = Url::parse(target) {
        return Ok(absolute);
    }

    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        target.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|err| {
        tracing::error!(error = %err, target, "Cannot build request URL");
        ClientError::configuration()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use crate::session::CredentialKey;
    use serde_json::json;

    fn session_with_token(token: &str) -> Session {
        let session = Session::in_memory();
        session.set(CredentialKey::Token, token).unwrap();
        session
    }

    fn authorization(descriptor: &RequestDescriptor) -> Option<&str> {
        descriptor
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
    }

    #[test]
    fn bearer_prefix_is_added_once() {
        assert_eq!(bearer_value("abc"), "Bearer abc");
        assert_eq!(bearer_value("Bearer abc"), "Bearer abc");
    }

    #[test]
    fn prepare_attaches_prefixed_token() {
        let session = session_with_token("abc123");
        let prepared = prepare(RequestDescriptor::get("/dashboard/overview"), &session).unwrap();
        assert_eq!(authorization(&prepared), Some("Bearer abc123"));
        assert_eq!(
            prepared.headers.get(CONTENT_TYPE).unwrap(),
            JSON_CONTENT_TYPE
        );
    }

    #[test]
    fn prepare_keeps_existing_scheme() {
        let session = session_with_token("Bearer abc123");
        let prepared = prepare(RequestDescriptor::get("/accounts"), &session).unwrap();
        assert_eq!(authorization(&prepared), Some("Bearer abc123"));
    }

    #[test]
    fn prepare_skips_token_for_login_and_register() {
        let session = session_with_token("abc123");
        for url in [LOGIN_ENDPOINT, REGISTER_ENDPOINT, "http://host/api/auth/login"] {
            let prepared = prepare(RequestDescriptor::post(url), &session).unwrap();
            assert!(authorization(&prepared).is_none(), "{url} must not carry a token");
            assert_eq!(
                prepared.headers.get(CONTENT_TYPE).unwrap(),
                JSON_CONTENT_TYPE
            );
        }
    }

    #[test]
    fn prepare_without_token_sends_no_authorization() {
        let prepared = prepare(RequestDescriptor::get("/accounts"), &Session::in_memory()).unwrap();
        assert!(authorization(&prepared).is_none());
    }

    #[test]
    fn prepare_overrides_content_type() {
        let descriptor = RequestDescriptor::post("/accounts/add").header(CONTENT_TYPE, "text/plain");
        let prepared = prepare(descriptor, &Session::in_memory()).unwrap();
        assert_eq!(
            prepared.headers.get(CONTENT_TYPE).unwrap(),
            JSON_CONTENT_TYPE
        );
    }

    #[test]
    fn prepare_rejects_token_with_control_characters() {
        let session = session_with_token("abc\n123");
        let err = prepare(RequestDescriptor::get("/accounts"), &session).unwrap_err();
        assert_eq!(err.kind(), Some(FailureKind::Configuration));
    }

    #[test]
    fn query_skips_absent_fields() {
        let mut descriptor = RequestDescriptor::get("/transactions")
            .query(&json!({ "status": "pending", "type": null, "limit": 5 }));
        descriptor.query.sort();
        assert_eq!(
            descriptor.query,
            vec![
                ("limit".to_string(), "5".to_string()),
                ("status".to_string(), "pending".to_string()),
            ]
        );
    }

    #[test]
    fn query_rejects_non_objects() {
        let descriptor = RequestDescriptor::get("/transactions").query(&json!([1, 2]));
        assert!(descriptor.invalid_reason().is_some());

        let err = prepare(descriptor, &Session::in_memory()).unwrap_err();
        assert_eq!(err.kind(), Some(FailureKind::Configuration));
    }

    #[test]
    fn invalid_header_marks_descriptor() {
        let descriptor = RequestDescriptor::get("/accounts").header(CONTENT_TYPE, "bad\nvalue");
        let err = prepare(descriptor, &Session::in_memory()).unwrap_err();
        assert_eq!(err.kind(), Some(FailureKind::Configuration));
    }

    #[test]
    fn unserializable_body_marks_descriptor() {
        use std::collections::HashMap;

        // serde_json only accepts string-like map keys
        let body: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
        let descriptor = RequestDescriptor::post("/accounts/add").json(&body);
        assert!(descriptor.body.is_none());
        assert!(descriptor.invalid_reason().is_some());
    }

    #[test]
    fn resolve_joins_relative_paths() {
        let base = Url::parse("http://localhost:5000/api").unwrap();
        assert_eq!(
            resolve_url(&base, "/auth/login").unwrap().as_str(),
            "http://localhost:5000/api/auth/login"
        );
        assert_eq!(
            resolve_url(&base, "admin/accounts").unwrap().as_str(),
            "http://localhost:5000/api/admin/accounts"
        );

        let base = Url::parse("http://localhost:5000/api/").unwrap();
        assert_eq!(
            resolve_url(&base, "/accounts").unwrap().as_str(),
            "http://localhost:5000/api/accounts"
        );
    }

    #[test]
    fn resolve_keeps_absolute_urls() {
        let base = Url::parse("http://localhost:5000/api").unwrap();
        assert_eq!(
            resolve_url(&base, "https://other.example/ping").unwrap().as_str(),
            "https://other.example/ping"
        );
    }
}
