use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::session::{FileStore, Session, StoreError};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Detects the environment from `APP_ENV`
    pub fn detect() -> Self {
        match env::var("APP_ENV").as_deref() {
            Ok("production" | "prod") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub api_base_url: Url,
    pub request_timeout: Duration,
    /// Credential file; the session lives in memory when absent
    pub session_file: Option<PathBuf>,
}

impl Config {
    /// Development defaults pointed at `api_base_url`
    pub fn new(api_base_url: Url) -> Self {
        Self {
            environment: Environment::Development,
            api_base_url,
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            session_file: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Loads the configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let environment = Environment::detect();

        tracing::info!(
            "🌍 Environment detected: {}",
            environment.as_str().to_uppercase()
        );

        let api_base_url = Self::get_api_url(&environment)?;
        let request_timeout = Self::get_timeout()?;
        let session_file = env::var("WALLET_SESSION_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        tracing::info!("✅ Configuration loaded successfully");
        tracing::debug!("   API: {}", Self::mask_credentials(api_base_url.as_str()));
        tracing::debug!("   Timeout: {} ms", request_timeout.as_millis());
        tracing::debug!(
            "   Session: {}",
            session_file
                .as_ref()
                .map_or_else(|| "in memory".to_string(), |p| p.display().to_string())
        );

        Ok(Self {
            environment,
            api_base_url,
            request_timeout,
            session_file,
        })
    }

    /// Reads WALLET_API_URL, which is mandatory in production
    fn get_api_url(environment: &Environment) -> Result<Url> {
        let raw = match env::var("WALLET_API_URL") {
            Ok(url) => url,
            Err(_) if environment.is_production() => {
                tracing::error!("❌ WALLET_API_URL not set in production!");
                anyhow::bail!("WALLET_API_URL is required in production");
            }
            Err(_) => {
                tracing::warn!("⚠️  WALLET_API_URL not set, using {DEFAULT_API_URL}");
                DEFAULT_API_URL.to_string()
            }
        };

        let url = Url::parse(&raw)
            .with_context(|| format!("WALLET_API_URL is not a valid URL: {raw}"))?;

        if environment.is_production() && url.scheme() != "https" {
            anyhow::bail!(
                "WALLET_API_URL must use https in production (current: {})",
                url.scheme()
            );
        }

        Ok(url)
    }

    fn get_timeout() -> Result<Duration> {
        let millis = match env::var("WALLET_REQUEST_TIMEOUT_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("WALLET_REQUEST_TIMEOUT_MS is not a number: {raw}"))?,
            Err(_) => DEFAULT_TIMEOUT_MS,
        };
        Ok(Duration::from_millis(millis))
    }

    /// Hides credentials embedded in a URL
    fn mask_credentials(url: &str) -> String {
        if let Some(at_pos) = url.find('@')
            && let Some(scheme_end) = url.find("://")
            && scheme_end < at_pos
        {
            let scheme = &url[..scheme_end + 3];
            let after_at = &url[at_pos..];
            return format!("{scheme}***:***{after_at}");
        }
        url.to_string()
    }

    /// Opens the session store selected by this configuration.
    ///
    /// # Errors
    /// Returns an error when the credential file exists but cannot be loaded.
    pub fn open_session(&self) -> Result<Session, StoreError> {
        match &self.session_file {
            Some(path) => Ok(Session::new(FileStore::open(path)?)),
            None => Ok(Session::in_memory()),
        }
    }
}
