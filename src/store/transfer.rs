use crate::data::AppData;
use crate::error::{Error, Result};
use crate::storage::StorageBackend;
use crate::store::core::SettingsStore;
use crate::sync::RwLockExt;

use log::{info, warn};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Default filename for exported settings
pub const DEFAULT_EXPORT_FILENAME: &str = "FIRE_Settings_Export.json";

impl<S: StorageBackend> SettingsStore<S> {
    /// Export the persisted blob to a pretty-printed JSON file.
    ///
    /// Exports what is *saved*, not the live aggregate: unsaved in-memory
    /// edits are deliberately not included.
    ///
    /// # Errors
    ///
    /// * [`Error::NoSavedData`] if nothing is persisted yet; no file is
    ///   created
    /// * [`Error::Parse`] if the persisted blob is malformed
    /// * [`Error::FileWrite`] if the target file cannot be written
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let blob = self
            .storage
            .load(&self.storage_key)?
            .ok_or_else(|| Error::NoSavedData(self.storage_key.clone()))?;

        // Re-indent for human consumption (2-space, serde_json pretty)
        let parsed: Value =
            serde_json::from_str(&blob).map_err(|e| Error::Parse(e.to_string()))?;
        let formatted = serde_json::to_string_pretty(&parsed)?;

        std::fs::write(path, formatted).map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!("Exported settings to '{}'", path.display());
        Ok(())
    }

    /// Export into a directory under [`DEFAULT_EXPORT_FILENAME`], creating
    /// the directory if needed. Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// Same conditions as [`export_to_file`](Self::export_to_file), plus
    /// [`Error::DirectoryCreate`] if the directory cannot be created.
    pub fn export_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| Error::DirectoryCreate {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = dir.join(DEFAULT_EXPORT_FILENAME);
        self.export_to_file(&path)?;
        Ok(path)
    }

    /// Import a settings file, replacing the persisted blob wholesale.
    ///
    /// Validation is minimal: the file must parse as a JSON object
    /// containing a `config` key; otherwise nothing is touched. On success
    /// the blob is overwritten
    /// (replaced, never merged), the live aggregate is re-hydrated from
    /// defaults plus the new blob, and every refresh listener is notified —
    /// the embeddable equivalent of the page reload a browser host would
    /// perform.
    ///
    /// # Errors
    ///
    /// * [`Error::FileRead`] if the file cannot be read
    /// * [`Error::Parse`] if the file is not valid JSON
    /// * [`Error::InvalidImport`] if it is not an object with a `config` key
    pub fn import_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| Error::Parse(e.to_string()))?;

        let obj = parsed
            .as_object()
            .ok_or_else(|| Error::InvalidImport("File content is not a JSON object".into()))?;
        if !obj.contains_key("config") {
            return Err(Error::InvalidImport(
                "Missing 'config' key; not a simulator settings file".into(),
            ));
        }

        // Commit the new blob wholesale, compact like a regular save
        self.storage
            .store(&self.storage_key, &serde_json::to_string(&parsed)?)?;

        // Re-hydrate from defaults plus the new blob. Field-level problems
        // inside an otherwise valid object leave the session at defaults,
        // exactly as a fresh start against this blob would.
        let mut fresh = AppData::default();
        if let Err(e) = fresh.shallow_merge(obj) {
            warn!("Imported settings did not fully parse, session starts at defaults: {e}");
        }
        *self.data.write_recovered() = fresh.clone();

        info!("Imported settings from '{}'", path.display());
        self.events.notify(&fresh);
        Ok(())
    }
}
