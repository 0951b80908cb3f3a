//! # Session Storage
//!
//! The durable key-value slot the cart persists into, abstracted behind a
//! trait so the store doesn't care where a session lives.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SessionStorage Backends                            │
//! │                                                                         │
//! │  MemoryStorage                      FileStorage                        │
//! │  ─────────────                      ───────────                        │
//! │  • HashMap in process               • One file per key in a session    │
//! │  • Gone when the process exits        directory                        │
//! │  • Tests, ephemeral sessions        • Survives reloads within the     │
//! │                                       session                          │
//! │                                     • wipe() ends the session          │
//! │                                                                         │
//! │  Both are best-effort: callers treat set() failure as a warning.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Storage Trait
// =============================================================================

/// A session-scoped durable key-value slot.
///
/// Values are opaque strings (the store writes JSON). A key that was never
/// set reads back as `None`, not an error.
pub trait SessionStorage {
    /// Reads the value at `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` at `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes the value at `key`. No-op if absent.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-process storage. Nothing survives the process; useful for tests and
/// for sessions that explicitly opt out of durability.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.slots.remove(key);
        Ok(())
    }
}

// =============================================================================
// File Storage
// =============================================================================

/// File-backed storage: one `<key>.json` file per key inside a session
/// directory.
///
/// ## Session Directory
/// The default location is the platform data-local dir
/// (e.g. `~/.local/share/bookstall/session` on Linux), resolved via
/// `directories`. A custom path can be supplied for tests or for running
/// several isolated sessions side by side.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at the given directory, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Storage {
            key: String::new(),
            reason: format!("cannot create session dir {}: {e}", dir.display()),
        })?;
        debug!(dir = %dir.display(), "opened session storage");
        Ok(FileStorage { dir })
    }

    /// Opens storage at the platform-default session directory.
    pub fn session_default() -> StoreResult<Self> {
        let dirs =
            ProjectDirs::from("com", "bookstall", "bookstall").ok_or(StoreError::NoSessionDir)?;
        FileStorage::new(dirs.data_local_dir().join("session"))
    }

    /// The directory this session lives in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Ends the session: removes the whole session directory and every
    /// slot in it.
    pub fn wipe(self) -> StoreResult<()> {
        fs::remove_dir_all(&self.dir).map_err(|e| StoreError::Storage {
            key: String::new(),
            reason: format!("cannot wipe session dir {}: {e}", self.dir.display()),
        })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Storage {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        fs::write(self.slot_path(key), value).map_err(|e| StoreError::Storage {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Storage {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("cart").unwrap(), None);

        storage.set("cart", "[]").unwrap();
        assert_eq!(storage.get("cart").unwrap().as_deref(), Some("[]"));

        storage.remove("cart").unwrap();
        assert_eq!(storage.get("cart").unwrap(), None);

        // Removing an absent key is fine
        storage.remove("cart").unwrap();
    }

    #[test]
    fn test_file_storage_round_trip() {
        let tmp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(tmp.path().join("session")).unwrap();

        assert_eq!(storage.get("cart").unwrap(), None);

        storage.set("cart", r#"[{"bookId":1}]"#).unwrap();
        assert_eq!(
            storage.get("cart").unwrap().as_deref(),
            Some(r#"[{"bookId":1}]"#)
        );

        // A second handle over the same directory sees the value
        let reopened = FileStorage::new(tmp.path().join("session")).unwrap();
        assert!(reopened.get("cart").unwrap().is_some());

        storage.remove("cart").unwrap();
        assert_eq!(storage.get("cart").unwrap(), None);
        storage.remove("cart").unwrap();
    }

    #[test]
    fn test_file_storage_wipe_ends_session() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("session");
        let mut storage = FileStorage::new(&dir).unwrap();
        storage.set("cart", "[]").unwrap();

        storage.wipe().unwrap();
        assert!(!dir.exists());
    }
}
