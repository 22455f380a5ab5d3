//! The settings store
//!
//! [`SettingsStore`] owns the live [`AppData`](crate::AppData) aggregate,
//! hydrates it from the persistence backend at construction, writes it back
//! on [`save`](SettingsStore::save), re-merges it on
//! [`reload`](SettingsStore::reload), and moves the persisted blob in and
//! out of portable JSON files.

mod core;
mod io;
mod transfer;

pub use self::core::{SettingsStore, DEFAULT_STORAGE_KEY};
pub use self::transfer::DEFAULT_EXPORT_FILENAME;
