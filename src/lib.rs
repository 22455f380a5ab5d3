//! # fire-settings
//!
//! Settings store for a client-local FIRE (financial independence / early
//! retirement) simulator: a shared [`AppData`] aggregate with documented
//! defaults, hydration from a key-value persistence backend, save/reload
//! with refresh notification, and portable JSON export/import of the
//! persisted blob.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fire_settings::{FileStorage, SettingsStore};
//!
//! // Hydrates from the persisted blob, or starts at defaults
//! let storage = FileStorage::for_app("fire-simulator")?;
//! let store = SettingsStore::initialize(storage);
//!
//! // Each settings page registers a refresh listener once
//! store.events().register("config", |data| {
//!     println!("period: {} years", data.config.period);
//! });
//!
//! // Pages mutate fields directly, then persist on demand
//! store.update(|data| data.config.inflation_rate = 1.5);
//! store.save()?;
//!
//! // Re-merge persisted state and notify every page
//! store.reload()?;
//! # Ok::<(), fire_settings::Error>(())
//! ```
//!
//! ## Export / Import
//!
//! ```rust,no_run
//! # use fire_settings::{MemoryStorage, SettingsStore};
//! # let store = SettingsStore::initialize(MemoryStorage::new());
//! // Writes FIRE_Settings_Export.json (pretty-printed) from the
//! // persisted blob, not from unsaved in-memory edits
//! let exported = store.export_to_dir("/tmp/exports")?;
//!
//! // Replaces the persisted blob wholesale, re-hydrates, and notifies
//! // every refresh listener
//! store.import_from_file(&exported)?;
//! # Ok::<(), fire_settings::Error>(())
//! ```
//!
//! ## Merge semantics
//!
//! Hydration and [`SettingsStore::reload`] shallow-merge the persisted
//! blob: only top-level keys present in the blob replace the in-memory
//! value, and they replace it wholesale. Keys absent from the blob keep
//! their current values. Unknown top-level keys are carried verbatim and
//! survive save and export.

mod data;
mod error;
mod events;
mod storage;
mod store;
mod sync;

pub use data::{AppData, SimConfig};
pub use error::{Error, Result};
pub use events::{RefreshCallback, RefreshRegistry};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::{SettingsStore, DEFAULT_EXPORT_FILENAME, DEFAULT_STORAGE_KEY};
