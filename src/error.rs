// src/error.rs

use std::fmt;

use wallet_client_api::StatusCode;

use crate::session::StoreError;

/// Classification of a failed call that did not produce a usable envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// HTTP 401
    Unauthorized,
    /// HTTP 422, raised by the service for invalid or expired tokens
    InvalidToken,
    Forbidden,
    NotFound,
    /// Any 5xx status
    ServerError(u16),
    /// Any other non-2xx status (400, 409, ...)
    Rejected(u16),
    Timeout,
    NetworkUnreachable,
    /// The request could not be built before dispatch
    Configuration,
    /// A 2xx body that is not an envelope
    MalformedResponse,
}

impl FailureKind {
    pub fn from_status(status: u16) -> Self {
        match StatusCode::from_u16(status) {
            Some(StatusCode::Unauthorized) => Self::Unauthorized,
            Some(StatusCode::UnprocessableEntity) => Self::InvalidToken,
            Some(StatusCode::Forbidden) => Self::Forbidden,
            Some(StatusCode::NotFound) => Self::NotFound,
            _ if (500..600).contains(&status) => Self::ServerError(status),
            _ => Self::Rejected(status),
        }
    }

    /// Notice shown when the server gave no message of its own.
    pub fn default_notice(self) -> &'static str {
        match self {
            Self::Unauthorized => "Session expired, please login again",
            Self::InvalidToken => "Invalid token, please login again",
            Self::Forbidden => "Access denied",
            Self::NotFound => "Resource not found",
            Self::ServerError(_) => "Server error, please try again later",
            Self::Rejected(_) => "Request failed",
            Self::Timeout => "Request timeout, please try again",
            Self::NetworkUnreachable => {
                "Network error, please check your connection and server status"
            }
            Self::Configuration => "Request configuration error",
            Self::MalformedResponse => "Invalid response format",
        }
    }

    /// Whether this failure invalidates the stored session.
    pub fn ends_session(self) -> bool {
        matches!(self, Self::Unauthorized | Self::InvalidToken)
    }

    pub fn status(self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(StatusCode::Unauthorized.as_u16()),
            Self::InvalidToken => Some(StatusCode::UnprocessableEntity.as_u16()),
            Self::Forbidden => Some(StatusCode::Forbidden.as_u16()),
            Self::NotFound => Some(StatusCode::NotFound.as_u16()),
            Self::ServerError(status) | Self::Rejected(status) => Some(status),
            Self::Timeout
            | Self::NetworkUnreachable
            | Self::Configuration
            | Self::MalformedResponse => None,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::InvalidToken => write!(f, "invalid token"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not found"),
            Self::ServerError(status) => write!(f, "server error ({status})"),
            Self::Rejected(status) => write!(f, "rejected ({status})"),
            Self::Timeout => write!(f, "timeout"),
            Self::NetworkUnreachable => write!(f, "network unreachable"),
            Self::Configuration => write!(f, "configuration error"),
            Self::MalformedResponse => write!(f, "malformed response"),
        }
    }
}

/// Outcome of a failed API call, decided once at the client boundary.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// The envelope carried an `error` field despite a 2xx status.
    #[error("{0}")]
    LogicalFailure(String),

    /// The call failed at the HTTP or transport level. `message` is the
    /// user-facing notice.
    #[error("{kind}: {message}")]
    TransportFailure { kind: FailureKind, message: String },

    #[error("Session storage error: {0}")]
    Storage(#[from] StoreError),
}

impl ClientError {
    /// Failure for a non-2xx status, preferring the server's own message.
    pub fn from_status(status: u16, server_message: Option<&str>) -> Self {
        let kind = FailureKind::from_status(status);
        let message = server_message.unwrap_or(kind.default_notice());
        Self::transport(kind, message)
    }

    pub fn transport(kind: FailureKind, message: impl Into<String>) -> Self {
        ClientError::TransportFailure {
            kind,
            message: message.into(),
        }
    }

    pub fn timeout() -> Self {
        Self::from_kind(FailureKind::Timeout)
    }

    pub fn network() -> Self {
        Self::from_kind(FailureKind::NetworkUnreachable)
    }

    pub fn configuration() -> Self {
        Self::from_kind(FailureKind::Configuration)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::transport(FailureKind::MalformedResponse, message)
    }

    fn from_kind(kind: FailureKind) -> Self {
        Self::transport(kind, kind.default_notice())
    }

    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            ClientError::TransportFailure { kind, .. } => Some(*kind),
            ClientError::LogicalFailure(_) | ClientError::Storage(_) => None,
        }
    }

    /// Text surfaced through the notification sink
    pub fn notice(&self) -> String {
        match self {
            ClientError::LogicalFailure(message) | ClientError::TransportFailure { message, .. } => {
                message.clone()
            }
            ClientError::Storage(err) => err.to_string(),
        }
    }

    pub fn ends_session(&self) -> bool {
        self.kind().is_some_and(FailureKind::ends_session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(FailureKind::from_status(401), FailureKind::Unauthorized);
        assert_eq!(FailureKind::from_status(422), FailureKind::InvalidToken);
        assert_eq!(FailureKind::from_status(403), FailureKind::Forbidden);
        assert_eq!(FailureKind::from_status(404), FailureKind::NotFound);
        assert_eq!(FailureKind::from_status(500), FailureKind::ServerError(500));
        assert_eq!(FailureKind::from_status(503), FailureKind::ServerError(503));
        assert_eq!(FailureKind::from_status(400), FailureKind::Rejected(400));
        assert_eq!(FailureKind::from_status(409), FailureKind::Rejected(409));
    }

    #[test]
    fn only_auth_failures_end_the_session() {
        assert!(ClientError::from_status(401, None).ends_session());
        assert!(ClientError::from_status(422, None).ends_session());
        assert!(!ClientError::from_status(403, None).ends_session());
        assert!(!ClientError::from_status(500, None).ends_session());
        assert!(!ClientError::timeout().ends_session());
        assert!(!ClientError::LogicalFailure("nope".to_string()).ends_session());
    }

    #[test]
    fn server_message_wins_over_default() {
        let err = ClientError::from_status(401, Some("Invalid password"));
        assert_eq!(err.notice(), "Invalid password");

        let err = ClientError::from_status(401, None);
        assert_eq!(err.notice(), "Session expired, please login again");
    }

    #[test]
    fn default_notices_for_transport_failures() {
        assert_eq!(
            ClientError::timeout().notice(),
            "Request timeout, please try again"
        );
        assert_eq!(
            ClientError::network().notice(),
            "Network error, please check your connection and server status"
        );
        assert_eq!(
            ClientError::configuration().notice(),
            "Request configuration error"
        );
    }

    #[test]
    fn logical_failure_displays_server_text() {
        let err = ClientError::LogicalFailure("Insufficient balance".to_string());
        assert_eq!(err.to_string(), "Insufficient balance");
        assert!(err.kind().is_none());
    }

    #[test]
    fn kind_reports_status() {
        assert_eq!(FailureKind::InvalidToken.status(), Some(422));
        assert_eq!(FailureKind::Rejected(400).status(), Some(400));
        assert_eq!(FailureKind::Timeout.status(), None);
    }
}
