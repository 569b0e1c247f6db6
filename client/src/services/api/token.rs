//! # Token Store
//!
//! Holds the bearer credential attached to outgoing requests. The store is
//! created once per session and shared (`Arc`) with the [`ApiClient`]; every
//! request reads the token when it is built, so clearing the token later
//! never affects a request that is already in flight.
//!
//! Durable persistence is best effort: if the configured [`TokenStorage`]
//! fails, the failure is logged and the token lives in memory only.
//!
//! [`ApiClient`]: super::client::ApiClient

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::service::TokenStorage;

pub struct TokenStore {
    current: RwLock<Option<String>>,
    storage: Option<Arc<dyn TokenStorage>>,
}

impl TokenStore {
    /// Memory-only store.
    pub fn in_memory() -> Self {
        Self {
            current: RwLock::new(None),
            storage: None,
        }
    }

    /// Store backed by `storage`, seeded with any previously persisted token.
    pub fn with_storage(storage: Arc<dyn TokenStorage>) -> Self {
        let initial = match storage.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load persisted token, starting without one");
                None
            }
        };

        Self {
            current: RwLock::new(initial),
            storage: Some(storage),
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.save(&token) {
                tracing::warn!(error = %e, "Failed to persist token, keeping it in memory only");
            }
        }
        *self.current.write() = Some(token);
        tracing::debug!("Bearer token updated");
    }

    pub fn clear_token(&self) {
        *self.current.write() = None;
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.clear() {
                tracing::warn!(error = %e, "Failed to remove persisted token");
            }
        }
        tracing::debug!("Bearer token cleared");
    }

    pub fn get_token(&self) -> Option<String> {
        self.current.read().clone()
    }

    pub fn has_token(&self) -> bool {
        self.current.read().is_some()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the credential itself
        f.debug_struct("TokenStore")
            .field("has_token", &self.has_token())
            .field("persistent", &self.storage.is_some())
            .finish()
    }
}

/// Persists the token as the sole content of a file.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/scholarship-client/token`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scholarship-client").join("token"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim().to_string();
                Ok((!token.is_empty()).then_some(token))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage;

    impl TokenStorage for BrokenStorage {
        fn load(&self) -> io::Result<Option<String>> {
            Err(io::Error::new(ErrorKind::PermissionDenied, "denied"))
        }

        fn save(&self, _token: &str) -> io::Result<()> {
            Err(io::Error::new(ErrorKind::PermissionDenied, "denied"))
        }

        fn clear(&self) -> io::Result<()> {
            Err(io::Error::new(ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_in_memory_lifecycle() {
        let store = TokenStore::in_memory();
        assert!(!store.has_token());

        store.set_token("abc");
        assert_eq!(store.get_token().as_deref(), Some("abc"));

        store.clear_token();
        assert!(!store.has_token());
        assert_eq!(store.get_token(), None);
    }

    #[test]
    fn test_file_storage_persists_across_stores() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("token");

        let store = TokenStore::with_storage(Arc::new(FileTokenStorage::new(&path)));
        store.set_token("persisted-token");
        assert_eq!(fs::read_to_string(&path).unwrap(), "persisted-token");

        let reopened = TokenStore::with_storage(Arc::new(FileTokenStorage::new(&path)));
        assert_eq!(reopened.get_token().as_deref(), Some("persisted-token"));

        reopened.clear_token();
        assert!(!path.exists());
        let third = TokenStore::with_storage(Arc::new(FileTokenStorage::new(&path)));
        assert!(!third.has_token());
    }

    #[test]
    fn test_clearing_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path().join("absent"));
        assert!(storage.clear().is_ok());
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_storage_failures_fall_back_to_memory() {
        let store = TokenStore::with_storage(Arc::new(BrokenStorage));
        assert!(!store.has_token());

        store.set_token("only-in-memory");
        assert_eq!(store.get_token().as_deref(), Some("only-in-memory"));

        store.clear_token();
        assert!(!store.has_token());
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let store = TokenStore::in_memory();
        store.set_token("secret-value");
        assert!(!format!("{store:?}").contains("secret-value"));
    }
}
