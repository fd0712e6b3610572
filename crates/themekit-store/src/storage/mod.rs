//! Durable key-value storage for the selection.
//!
//! The store writes three string entries after every successful change and
//! reads them back once at startup:
//!
//! | Key        | Value                      |
//! |------------|----------------------------|
//! | `theme`    | theme id                   |
//! | `darkMode` | `"true"` or `"false"`      |
//! | `font`     | font id                    |
//!
//! Storage failures never reach store callers. They are logged and the
//! in-memory selection stays authoritative.

mod file;
mod memory;

pub use file::TomlFileStorage;
pub use memory::MemoryStorage;

use std::path::PathBuf;

use thiserror::Error;

use crate::selection::Selection;

pub const THEME_KEY: &str = "theme";
pub const DARK_MODE_KEY: &str = "darkMode";
pub const FONT_KEY: &str = "font";

/// Storage backend error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// File I/O error.
    #[error("Failed to {operation} selection file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored document could not be parsed.
    #[error("Selection file is corrupt: {path}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize selection")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },

    /// Backend refuses access (disabled, quota exceeded, read-only).
    #[error("Selection storage unavailable: {reason}")]
    Unavailable { reason: String },
}

impl StorageError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the selection file at {}", operation, path.display())
            }
            Self::Corrupt { path, .. } => format!(
                "The selection file at {} is not valid TOML and will be replaced on the next change.",
                path.display()
            ),
            Self::Serialize { .. } => "The selection could not be saved.".to_string(),
            Self::Unavailable { reason } => {
                format!("Selection storage is unavailable ({reason}). Changes last until exit.")
            }
        }
    }
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A string key-value store that survives the process.
pub trait SelectionStorage {
    /// Read one entry. A missing key is `Ok(None)`.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write one entry.
    fn store(&mut self, key: &str, value: &str) -> Result<()>;

    /// Write several entries. Backends that can batch should override this.
    fn store_all(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, value) in entries {
            self.store(key, value)?;
        }
        Ok(())
    }
}

impl<S: SelectionStorage + ?Sized> SelectionStorage for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).store(key, value)
    }

    fn store_all(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        (**self).store_all(entries)
    }
}

/// Encode the dark-mode flag the way it is persisted.
pub fn encode_dark_mode(dark_mode: bool) -> &'static str {
    if dark_mode { "true" } else { "false" }
}

/// Decode a persisted dark-mode flag. Anything but `"true"`/`"false"` is
/// treated as absent.
pub fn decode_dark_mode(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Write all three selection entries in one batch.
pub(crate) fn persist(storage: &mut dyn SelectionStorage, selection: &Selection) -> Result<()> {
    storage.store_all(&[
        (THEME_KEY, selection.theme.as_str()),
        (DARK_MODE_KEY, encode_dark_mode(selection.dark_mode)),
        (FONT_KEY, selection.font.as_str()),
    ])
}
