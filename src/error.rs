//! Error types for the fire-settings library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fire-settings operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for fire-settings operations
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete file '{path}': {source}")]
    FileDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to serialize data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("No saved settings found under key '{0}'")]
    NoSavedData(String),

    #[error("Invalid settings file: {0}")]
    InvalidImport(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is a "nothing persisted yet" type error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NoSavedData(_))
    }

    /// Check if this error rejects an import file (as opposed to an I/O failure)
    #[must_use]
    pub fn is_invalid_import(&self) -> bool {
        matches!(self, Error::InvalidImport(_) | Error::Parse(_))
    }
}
