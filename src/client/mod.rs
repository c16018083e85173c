//! HTTP client core: the single chokepoint for every outbound call.
//!
//! `send` composes an explicit pipeline around the transport call:
//!
//! 1. [`prepare`]: content type and `Authorization` header injection
//! 2. dispatch with the configured timeout
//! 3. [`response::classify`]: envelope unwrapping or failure classification
//! 4. `after_success`: login token persistence and success notices
//! 5. `after_failure`: error notices, and for 401/422 session clearing plus
//!    navigation to the login view
//!
//! Side effects only go through the injected [`Session`], [`Notifier`] and
//! [`Navigator`].

pub mod request;
mod response;

use std::sync::Arc;

use reqwest::Method;
use tracing::Instrument;
use url::Url;
use wallet_client_api::Envelope;

pub use request::{LOGIN_ENDPOINT, REGISTER_ENDPOINT, RequestDescriptor, bearer_value, prepare};

use crate::config::Config;
use crate::error::ClientError;
use crate::notify::Notifier;
use crate::router::{LOGIN_PATH, Navigator};
use crate::session::{CredentialKey, Session};

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Session,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// # Errors
    /// Returns a configuration error when the HTTP client cannot be built.
    pub fn new(
        config: &Config,
        session: Session,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| {
                tracing::error!(error = %err, "Failed to build HTTP client");
                ClientError::configuration()
            })?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            session,
            notifier,
            navigator,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends one call through the interceptor pipeline.
    ///
    /// # Errors
    /// Every failure has already been surfaced through the notifier (and, for
    /// 401/422, has cleared the session and redirected to login) when it is
    /// returned here.
    pub async fn send(&self, descriptor: RequestDescriptor) -> Result<Envelope, ClientError> {
        let url = descriptor.url.clone();
        let method = descriptor.method.clone();
        let is_login = descriptor.is_login();

        self.exchange(descriptor)
            .await
            .and_then(|envelope| self.after_success(&method, is_login, envelope))
            .map_err(|err| self.after_failure(&url, err))
    }

    async fn exchange(&self, descriptor: RequestDescriptor) -> Result<Envelope, ClientError> {
        let prepared = prepare(descriptor, &self.session)?;
        let request = self.build(&prepared)?;

        let span = tracing::info_span!(
            "wallet.request",
            http.method = %prepared.method,
            url = %request.url()
        );

        async {
            tracing::debug!("Requesting URL");
            let response = self
                .http
                .execute(request)
                .await
                .map_err(|err| response::map_transport_error(&err))?;
            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|err| response::map_transport_error(&err))?;
            tracing::debug!(status = status.as_u16(), bytes = body.len(), "Response received");
            response::classify(status, &body)
        }
        .instrument(span)
        .await
    }

    fn build(&self, descriptor: &RequestDescriptor) -> Result<reqwest::Request, ClientError> {
        let url = request::resolve_url(&self.base_url, &descriptor.url)?;
        let mut builder = self
            .http
            .request(descriptor.method.clone(), url)
            .headers(descriptor.headers.clone());

        if !descriptor.query.is_empty() {
            builder = builder.query(&descriptor.query);
        }
        if let Some(body) = &descriptor.body {
            builder = builder.json(body);
        }

        builder
            .build()
            .map_err(|err| response::map_transport_error(&err))
    }

    fn after_success(
        &self,
        method: &Method,
        is_login: bool,
        envelope: Envelope,
    ) -> Result<Envelope, ClientError> {
        if is_login && let Some(token) = envelope.access_token() {
            tracing::debug!("Storing new token from login");
            self.session.set(CredentialKey::Token, token)?;
        }

        if let Some(message) = envelope.message()
            && *method != Method::GET
            && !is_login
        {
            self.notifier.success(message);
        }

        Ok(envelope)
    }

    /// Surfaces a failure raised after `send` returned, for instance while
    /// decoding or persisting a payload, exactly as the pipeline would.
    pub(crate) fn report(&self, url: &str, err: ClientError) -> ClientError {
        self.after_failure(url, err)
    }

    fn after_failure(&self, url: &str, err: ClientError) -> ClientError {
        if err.ends_session() {
            tracing::warn!(url, error = %err, "Session rejected, clearing credentials");
            if let Err(store_err) = self.session.clear_all() {
                tracing::error!(error = %store_err, "Failed to clear credentials");
            }
            self.navigator.navigate(LOGIN_PATH);
        } else {
            tracing::warn!(url, error = %err, "Request failed");
        }

        self.notifier.error(&err.notice());
        err
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
