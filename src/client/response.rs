//! Post-response classification: envelope unwrapping and failure mapping.

use reqwest::StatusCode;
use wallet_client_api::{Envelope, ErrorBody};

use crate::error::{ClientError, FailureKind};

/// Turns a received response into the envelope or a classified failure.
pub(crate) fn classify(status: StatusCode, body: &[u8]) -> Result<Envelope, ClientError> {
    if !status.is_success() {
        let error_body = ErrorBody::parse(body);
        tracing::debug!(
            status = status.as_u16(),
            server_message = error_body.message(),
            "Error status received"
        );
        return Err(ClientError::from_status(status.as_u16(), error_body.message()));
    }

    let envelope = decode_envelope(body)?;
    match envelope.error() {
        Some(error) => {
            tracing::warn!(error = %error, "API error in successful response");
            Err(ClientError::LogicalFailure(error))
        }
        None => Ok(envelope),
    }
}

fn decode_envelope(body: &[u8]) -> Result<Envelope, ClientError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Envelope::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        tracing::warn!(error = %err, "Response body is not an envelope");
        ClientError::malformed(FailureKind::MalformedResponse.default_notice())
    })
}

/// Maps a reqwest failure (no usable response) to a transport failure.
pub(crate) fn map_transport_error(err: &reqwest::Error) -> ClientError {
    if err.is_timeout() {
        tracing::warn!(error = %err, "Request timed out");
        ClientError::timeout()
    } else if err.is_builder() {
        tracing::error!(error = %err, "Request could not be built");
        ClientError::configuration()
    } else {
        tracing::warn!(error = %err, "No response received");
        ClientError::network()
    }
}
