use crate::error::{Error, Result};
use crate::storage::StorageBackend;
use crate::store::core::SettingsStore;
use crate::sync::RwLockExt;

use log::info;

impl<S: StorageBackend> SettingsStore<S> {
    /// Persist the current aggregate under the storage key.
    ///
    /// The blob is written compact; pretty-printing is reserved for file
    /// export.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage backend fails
    /// (e.g. quota exceeded or unwritable directory).
    pub fn save(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.snapshot())?;
        self.storage.store(&self.storage_key, &blob)?;

        info!("Settings saved under '{}'", self.storage_key);
        Ok(())
    }

    /// Re-read the persisted blob and shallow-merge it into the live
    /// aggregate.
    ///
    /// Keys absent from the blob retain their current in-memory values.
    /// On success every registered refresh listener is notified with the
    /// merged data.
    ///
    /// # Errors
    ///
    /// * [`Error::NoSavedData`] if nothing is persisted under the key
    /// * [`Error::Parse`] if the blob is malformed; the aggregate is left
    ///   unmodified
    pub fn reload(&self) -> Result<()> {
        let blob = self
            .storage
            .load(&self.storage_key)?
            .ok_or_else(|| Error::NoSavedData(self.storage_key.clone()))?;

        let merged = {
            let mut guard = self.data.write_recovered();
            Self::hydrate(&mut *guard, &blob)?;
            guard.clone()
        };

        info!("Settings reloaded from '{}'", self.storage_key);
        self.events.notify(&merged);
        Ok(())
    }
}
