use crate::data::{AppData, SimConfig};
use crate::events::RefreshRegistry;
use crate::storage::StorageBackend;
use crate::sync::RwLockExt;

use log::{debug, warn};
use serde_json::Value;
use std::sync::RwLock;

/// Storage key the simulator has always persisted its blob under.
///
/// Kept verbatim so existing saved data keeps loading.
pub const DEFAULT_STORAGE_KEY: &str = "fireSimulatorData";

/// Settings store for the simulator.
///
/// Owns the shared [`AppData`] aggregate that all settings pages read and
/// mutate, together with the persistence backend and the refresh listener
/// registry. Construct one per application session and pass a reference to
/// whatever needs it.
///
/// # Example
///
/// ```rust,no_run
/// use fire_settings::{FileStorage, SettingsStore};
///
/// let storage = FileStorage::for_app("fire-simulator")?;
/// let store = SettingsStore::initialize(storage);
///
/// store.events().register("config", |data| {
///     println!("horizon: {} years", data.config.period);
/// });
///
/// store.update(|data| data.config.period = 30);
/// store.save()?;
/// # Ok::<(), fire_settings::Error>(())
/// ```
pub struct SettingsStore<S: StorageBackend = crate::storage::FileStorage> {
    /// Persistence backend
    pub(crate) storage: S,

    /// Key the blob is persisted under
    pub(crate) storage_key: String,

    /// The live aggregate
    pub(crate) data: RwLock<AppData>,

    /// Listeners notified after reload and import
    pub(crate) events: RefreshRegistry,
}

impl<S: StorageBackend> SettingsStore<S> {
    /// Create a store at defaults and hydrate it from the persisted blob.
    ///
    /// If a blob exists under [`DEFAULT_STORAGE_KEY`] and parses as a JSON
    /// object, its top-level keys are shallow-merged over the defaults.
    /// Missing or unparseable data is logged and the store starts at
    /// defaults; initialization itself never fails.
    pub fn initialize(storage: S) -> Self {
        Self::initialize_with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Like [`initialize`](Self::initialize), with a custom storage key.
    pub fn initialize_with_key(storage: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let mut data = AppData::default();

        match storage.load(&storage_key) {
            Ok(Some(blob)) => match Self::hydrate(&mut data, &blob) {
                Ok(()) => debug!("Hydrated settings from key '{storage_key}'"),
                Err(e) => warn!("Failed to parse persisted settings, using defaults: {e}"),
            },
            Ok(None) => debug!("No persisted settings under '{storage_key}', using defaults"),
            Err(e) => warn!("Failed to read persisted settings, using defaults: {e}"),
        }

        Self {
            storage,
            storage_key,
            data: RwLock::new(data),
            events: RefreshRegistry::new(),
        }
    }

    /// Shallow-merge a persisted blob into `data`.
    pub(crate) fn hydrate(data: &mut AppData, blob: &str) -> crate::Result<()> {
        let parsed: Value =
            serde_json::from_str(blob).map_err(|e| crate::Error::Parse(e.to_string()))?;
        let obj = parsed
            .as_object()
            .ok_or_else(|| crate::Error::Parse("Persisted settings are not a JSON object".into()))?;
        data.shallow_merge(obj)
    }

    /// Clone of the current aggregate
    pub fn snapshot(&self) -> AppData {
        self.data.read_recovered().clone()
    }

    /// Clone of the current simulation parameters
    pub fn config(&self) -> SimConfig {
        self.data.read_recovered().config.clone()
    }

    /// Mutate the aggregate in place.
    ///
    /// This is how settings pages assign their fields; nothing is persisted
    /// until [`save`](Self::save) is called.
    pub fn update<R>(&self, f: impl FnOnce(&mut AppData) -> R) -> R {
        f(&mut self.data.write_recovered())
    }

    /// Refresh listener registry
    pub fn events(&self) -> &RefreshRegistry {
        &self.events
    }

    /// Key the blob is persisted under
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// The persistence backend
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
