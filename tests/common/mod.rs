#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use tokio::sync::mpsc::UnboundedReceiver;
use url::Url;
use wallet_client::{ApiClient, ChannelNotifier, Config, CredentialKey, Notice, Router, Session};
use wiremock::MockServer;

pub const TOKEN: &str = "abc123";

/// A client wired to a mock wallet API, with observable side effects.
pub struct Harness {
    pub server: MockServer,
    pub session: Session,
    pub router: Arc<Router>,
    pub client: ApiClient,
    notices: UnboundedReceiver<Notice>,
}

impl Harness {
    pub async fn start() -> Self {
        Self::with_timeout(Duration::from_secs(5)).await
    }

    pub async fn with_timeout(timeout: Duration) -> Self {
        Self::with_session(Session::in_memory(), timeout).await
    }

    pub async fn with_session(session: Session, timeout: Duration) -> Self {
        let server = MockServer::start().await;
        let base = Url::parse(&format!("{}/api", server.uri())).unwrap();
        let config = Config::new(base).with_timeout(timeout);

        let router = Arc::new(Router::wallet(session.clone()));
        let (notifier, notices) = ChannelNotifier::new();
        let client =
            ApiClient::new(&config, session.clone(), Arc::new(notifier), router.clone()).unwrap();

        Self {
            server,
            session,
            router,
            client,
            notices,
        }
    }

    /// Stores a signed-in regular user.
    pub fn sign_in(&self) {
        self.session.set(CredentialKey::Token, TOKEN).unwrap();
        self.session
            .set(CredentialKey::User, user_json(false).to_string())
            .unwrap();
    }

    /// Stores a signed-in admin.
    pub fn sign_in_admin(&self) {
        self.sign_in();
        self.session.set(CredentialKey::IsAdmin, "true").unwrap();
    }

    pub fn snapshot(&self) -> Vec<Option<String>> {
        CredentialKey::ALL
            .iter()
            .map(|key| self.session.get(*key))
            .collect()
    }

    pub fn assert_session_cleared(&self) {
        for key in CredentialKey::ALL {
            assert!(
                self.session.get(key).is_none(),
                "{} should have been cleared",
                key.as_str()
            );
        }
    }

    pub fn notices(&mut self) -> Vec<Notice> {
        let mut drained = Vec::new();
        while let Ok(notice) = self.notices.try_recv() {
            drained.push(notice);
        }
        drained
    }

    pub async fn received_authorization(&self) -> Vec<Option<String>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| {
                request
                    .headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            })
            .collect()
    }
}

pub fn user_json(is_admin: bool) -> Value {
    json!({
        "id": "ACC1",
        "name": "Alice",
        "email": "alice@example.com",
        "phone": "5550100",
        "is_admin": is_admin,
        "balance": 250.0
    })
}

pub fn login_body(is_admin: bool) -> Value {
    json!({
        "data": {
            "access_token": TOKEN,
            "user": user_json(is_admin)
        },
        "message": "Login successful"
    })
}

pub fn error(text: &str) -> Notice {
    Notice::Error(text.to_string())
}

pub fn success(text: &str) -> Notice {
    Notice::Success(text.to_string())
}
