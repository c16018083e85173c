//! Credential store backends.
//!
//! Both backends keep the three session keys in a single map behind a lock so
//! that `clear_all` removes them in one critical section.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

/// Keys persisted for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CredentialKey {
    Token,
    User,
    IsAdmin,
}

impl CredentialKey {
    pub const ALL: [CredentialKey; 3] = [Self::Token, Self::User, Self::IsAdmin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::User => "user",
            Self::IsAdmin => "isAdmin",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Credential file I/O failed: {0}")]
    Io(String),
    #[error("Credential file is not valid JSON: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Synchronously readable key-value persistence for session credentials.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: CredentialKey) -> Option<String>;

    /// # Errors
    /// Returns an error when the backend cannot persist the value.
    fn set(&self, key: CredentialKey, value: String) -> Result<(), StoreError>;

    /// # Errors
    /// Returns an error when the backend cannot persist the removal.
    fn remove(&self, key: CredentialKey) -> Result<(), StoreError>;

    /// Removes every session key at once.
    ///
    /// # Errors
    /// Returns an error when the backend cannot persist the removal.
    fn clear_all(&self) -> Result<(), StoreError>;
}

type Entries = BTreeMap<CredentialKey, String>;

/// Process-local store, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Entries>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&key).cloned()
    }

    fn set(&self, key: CredentialKey, value: String) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: CredentialKey) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(&key);
        Ok(())
    }

    fn clear_all(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.clear();
        Ok(())
    }
}

/// JSON file store that survives restarts.
///
/// The file holds an object keyed by `token`, `user` and `isAdmin`. Every
/// mutation rewrites it through a temporary file and a rename, so readers
/// never observe a half-written session.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl FileStore {
    /// Opens the store at `path`, loading existing credentials if the file exists.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                Entries::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            Entries::new()
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "Credential file loaded");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mutate(&self, apply: impl FnOnce(&mut Entries)) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = entries.clone();
        apply(&mut next);
        Self::write(&self.path, &next)?;
        *entries = next;
        Ok(())
    }

    fn write(path: &Path, entries: &Entries) -> Result<(), StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl CredentialStore for FileStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(&key).cloned()
    }

    fn set(&self, key: CredentialKey, value: String) -> Result<(), StoreError> {
        self.mutate(|entries| {
            entries.insert(key, value);
        })
    }

    fn remove(&self, key: CredentialKey) -> Result<(), StoreError> {
        self.mutate(|entries| {
            entries.remove(&key);
        })
    }

    fn clear_all(&self) -> Result<(), StoreError> {
        self.mutate(Entries::clear)
    }
}
