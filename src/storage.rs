//! Storage backend trait and implementations
//!
//! The persistence facility is a string-keyed blob store, mirroring the
//! browser-local storage the simulator originally persisted into.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::sync::RwLockExt;

/// Trait for key-value blob storage implementations
pub trait StorageBackend: Clone + Send + Sync {
    /// Read the blob stored under `key`, or `None` if nothing was saved yet
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `blob` under `key`, replacing any previous value
    fn store(&self, key: &str, blob: &str) -> Result<()>;

    /// Delete the blob under `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

// =============================================================================
// File Storage Implementation
// =============================================================================

/// File-backed storage: one `<key>.json` file per key under a directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a file storage under the platform config directory
    /// (e.g. `~/.config/<app_name>` on Linux).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the platform config directory cannot be
    /// determined.
    pub fn for_app(app_name: &str) -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine platform config directory".into()))?;
        Ok(Self::new(base.join(app_name)))
    }

    /// Root directory of this storage
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::FileRead { path, source: e }),
        }
    }

    fn store(&self, key: &str, blob: &str) -> Result<()> {
        let path = self.key_path(key);

        std::fs::create_dir_all(&self.dir).map_err(|e| Error::DirectoryCreate {
            path: self.dir.clone(),
            source: e,
        })?;

        // Atomic write: temp file + rename to prevent a torn blob
        let mut temp_name = path
            .file_name()
            .ok_or_else(|| Error::Config(format!("Invalid storage key '{key}'")))?
            .to_os_string();
        temp_name.push(".tmp");
        let temp_path = path.with_file_name(temp_name);

        std::fs::write(&temp_path, blob).map_err(|e| Error::FileWrite {
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &path).map_err(|e| Error::FileWrite { path, source: e })
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::FileDelete { path, source: e }),
        }
    }
}

// =============================================================================
// Memory Storage Implementation
// =============================================================================

/// In-memory storage, shared across clones.
///
/// Used by tests and by embedders that manage durability themselves.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read_recovered().get(key).cloned())
    }

    fn store(&self, key: &str, blob: &str) -> Result<()> {
        self.entries
            .write_recovered()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write_recovered().remove(key);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
