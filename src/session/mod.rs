//! Client-side session: token, cached profile and admin flag.
//!
//! A [`Session`] is a cheap handle around a [`CredentialStore`]. The same
//! handle is injected into the API client and the route guard, which is how
//! a 401 seen by one call is observed by the next navigation.

pub mod store;

use std::sync::Arc;

use wallet_client_api::{LoginData, UserProfile};

pub use store::{CredentialKey, CredentialStore, FileStore, MemoryStore, StoreError};

const ADMIN_FLAG: &str = "true";

#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl Session {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    pub fn get(&self, key: CredentialKey) -> Option<String> {
        self.store.get(key)
    }

    /// # Errors
    /// Returns an error when the backing store cannot persist the value.
    pub fn set(&self, key: CredentialKey, value: impl Into<String>) -> Result<(), StoreError> {
        self.store.set(key, value.into())
    }

    /// # Errors
    /// Returns an error when the backing store cannot persist the removal.
    pub fn remove(&self, key: CredentialKey) -> Result<(), StoreError> {
        self.store.remove(key)
    }

    /// # Errors
    /// Returns an error when the backing store cannot persist the removal.
    pub fn clear_all(&self) -> Result<(), StoreError> {
        self.store.clear_all()
    }

    pub fn token(&self) -> Option<String> {
        self.get(CredentialKey::Token).filter(|t| !t.is_empty())
    }

    /// Cached profile; an unreadable entry is treated as absent.
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.get(CredentialKey::User)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring unreadable cached user profile");
                None
            }
        }
    }

    pub fn is_admin(&self) -> bool {
        self.get(CredentialKey::IsAdmin).as_deref() == Some(ADMIN_FLAG)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persists the outcome of a successful login. The profile is stored with
    /// every field the service sent.
    ///
    /// The admin flag is removed for regular users so that a previous admin
    /// login on the same store does not leak into this one.
    ///
    /// # Errors
    /// Returns an error when the backing store cannot persist a key.
    pub fn store_login(&self, login: &LoginData) -> Result<(), StoreError> {
        self.set(CredentialKey::Token, login.access_token.as_str())?;
        self.set(CredentialKey::User, serde_json::to_string(&login.user)?)?;
        if login.user.is_admin() {
            self.set(CredentialKey::IsAdmin, ADMIN_FLAG)
        } else {
            self.remove(CredentialKey::IsAdmin)
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("is_admin", &self.is_admin())
            .finish()
    }
}
