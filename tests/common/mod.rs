//! Common test utilities for fire-settings integration tests

#![allow(dead_code)]

use fire_settings::{FileStorage, SettingsStore, DEFAULT_STORAGE_KEY};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture providing a temporary directory and a file-backed store
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub store: SettingsStore<FileStorage>,
}

impl TestFixture {
    /// Create a fixture with an empty storage directory (no persisted blob)
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        let store = SettingsStore::initialize(FileStorage::new(data_dir));

        Self { temp_dir, store }
    }

    /// Create a fixture whose storage already holds the given raw blob
    pub fn with_persisted_blob(blob: &str) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        std::fs::write(
            data_dir.join(format!("{DEFAULT_STORAGE_KEY}.json")),
            blob,
        )
        .expect("Failed to seed blob");

        let store = SettingsStore::initialize(FileStorage::new(data_dir));
        Self { temp_dir, store }
    }

    /// Directory blobs are persisted into
    pub fn data_dir(&self) -> PathBuf {
        self.temp_dir.path().join("data")
    }

    /// Path of the persisted blob file
    pub fn blob_path(&self) -> PathBuf {
        self.data_dir().join(format!("{DEFAULT_STORAGE_KEY}.json"))
    }

    /// A scratch directory for export/import files
    pub fn scratch_dir(&self) -> PathBuf {
        let dir = self.temp_dir.path().join("scratch");
        std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
        dir
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Read and parse the persisted blob, if any
pub fn read_persisted_blob(fixture: &TestFixture) -> Option<serde_json::Value> {
    let path = fixture.blob_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).ok()?;
        serde_json::from_str(&content).ok()
    } else {
        None
    }
}

/// Read the persisted blob file verbatim, if any
pub fn read_raw_blob(fixture: &TestFixture) -> Option<String> {
    std::fs::read_to_string(fixture.blob_path()).ok()
}
