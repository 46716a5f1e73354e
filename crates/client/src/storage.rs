//! Durable client-side session storage.
//!
//! The only state this application persists locally is the credential
//! token and the cached identity projection; both are written on login and
//! cleared on logout. The [`SessionStorage`] trait is the seam: the file
//! implementation backs real use, the in-memory one backs tests.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tienda_core::Identity;

/// Errors reading or writing the persisted session.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem access failed.
    #[error("session storage I/O error: {0}")]
    Io(#[from] io::Error),
    /// The stored session file is not valid JSON.
    #[error("stored session is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The persisted session: credential token plus identity projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Opaque credential token, replayed as a bearer credential.
    pub token: String,
    /// Cached projection of the authenticated user.
    pub identity: Identity,
}

/// Durable key-value storage for the session.
pub trait SessionStorage: Send + Sync {
    /// Load the persisted session, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored data exists but cannot be read.
    fn load(&self) -> Result<Option<StoredSession>, StorageError>;

    /// Persist the session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when the session cannot be written.
    fn save(&self, session: &StoredSession) -> Result<(), StorageError>;

    /// Remove the persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored data cannot be removed.
    fn clear(&self) -> Result<(), StorageError>;
}

/// File-backed session storage (JSON at a configured path).
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `path`. Parent directories are created on
    /// the first save.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Option<StoredSession>, StorageError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn save(&self, session: &StoredSession) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(session)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory session storage for tests and ephemeral embedders.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    session: Mutex<Option<StoredSession>>,
}

impl MemoryStorage {
    /// Create empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<StoredSession>, StorageError> {
        Ok(self
            .session
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn save(&self, session: &StoredSession) -> Result<(), StorageError> {
        *self
            .session
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self
            .session
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tienda_core::{Role, UserId};

    fn session() -> StoredSession {
        StoredSession {
            token: "h.p.s".to_owned(),
            identity: Identity {
                id: UserId::new(1),
                role: Role::Customer,
                email: "laura@example.com".to_owned(),
                name: "Laura".to_owned(),
            },
        }
    }

    #[test]
    fn test_memory_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        storage.save(&session()).unwrap();
        assert_eq!(storage.load().unwrap(), Some(session()));

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "tienda-session-test-{}-{}.json",
            std::process::id(),
            line!()
        ));
        let storage = FileStorage::new(path.clone());

        assert!(storage.load().unwrap().is_none());
        storage.save(&session()).unwrap();
        assert_eq!(storage.load().unwrap(), Some(session()));

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
        // Clearing twice is not an error
        storage.clear().unwrap();

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_file_corrupt_session_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "tienda-session-test-{}-{}.json",
            std::process::id(),
            line!()
        ));
        std::fs::write(&path, b"no es json").unwrap();

        let storage = FileStorage::new(path.clone());
        assert!(matches!(storage.load(), Err(StorageError::Corrupt(_))));

        let _ = std::fs::remove_file(path);
    }
}
