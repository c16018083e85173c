//! # wallet-client
//!
//! Client for the wallet HTTP API.
//!
//! The [`ApiClient`] is the single chokepoint for outbound calls: it attaches
//! the session token, unwraps the response envelope, and maps failures to user
//! notices. For 401/422 it also clears the session and redirects to the login
//! view. The [`Router`] gates navigation on the same [`Session`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use url::Url;
//! use wallet_client::{ApiClient, Config, Router, Session, TracingNotifier, endpoints};
//!
//! # async fn run() -> Result<(), wallet_client::ClientError> {
//! let config = Config::new(Url::parse("http://localhost:5000/api").unwrap());
//! let session = Session::in_memory();
//! let router = Arc::new(Router::wallet(session.clone()));
//! let client = ApiClient::new(&config, session, Arc::new(TracingNotifier), router.clone())?;
//!
//! let _overview = endpoints::dashboard::overview(&client).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod notify;
pub mod router;
pub mod session;

pub use client::{ApiClient, RequestDescriptor};
pub use config::Config;
pub use error::{ClientError, FailureKind};
pub use notify::{ChannelNotifier, Notice, Notifier, TracingNotifier};
pub use router::{Navigation, NavigationError, Navigator, RouteGuard, RouteTable, Router};
pub use session::{CredentialKey, CredentialStore, FileStore, MemoryStore, Session};

pub use wallet_client_api as api;
