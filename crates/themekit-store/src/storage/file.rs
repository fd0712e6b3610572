//! TOML-file storage in the user's config directory.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use super::{Result, SelectionStorage, StorageError};

/// Stores the selection as a flat TOML table:
///
/// ```toml
/// darkMode = "true"
/// font = "mono"
/// theme = "corporate-green"
/// ```
///
/// The file is read on every `load` and rewritten atomically (temp file +
/// rename) on every batch write. Keys are independent: a key holding a
/// non-string value reads as absent without hiding the others.
#[derive(Debug, Clone)]
pub struct TomlFileStorage {
    path: PathBuf,
}

impl TomlFileStorage {
    /// Storage at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at [`TomlFileStorage::default_path`].
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    /// Get the default selection file path.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "themekit", "themekit")
            .map(|dirs| dirs.config_dir().join("selection.toml"))
            .unwrap_or_else(|| PathBuf::from("selection.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<Table> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Table::new()),
            Err(e) => {
                return Err(StorageError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        toml::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write_table(&self, table: &Table) -> Result<()> {
        let content =
            toml::to_string(table).map_err(|e| StorageError::Serialize { source: e })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                operation: "create directory for",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = self.path.with_extension("toml.tmp");
        let mut file = File::create(&temp_path).map_err(|e| StorageError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(content.as_bytes())
            .map_err(|e| StorageError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;
        file.sync_all().map_err(|e| StorageError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| StorageError::Io {
            operation: "replace",
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!("Saved selection to {}", self.path.display());
        Ok(())
    }
}

impl SelectionStorage for TomlFileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match self.read_table()?.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                tracing::warn!(
                    key,
                    kind = other.type_str(),
                    "ignoring non-string value in selection file"
                );
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        self.store_all(&[(key, value)])
    }

    fn store_all(&mut self, entries: &[(&str, &str)]) -> Result<()> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut table = self.read_table().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "discarding unreadable selection file");
            Table::new()
        });
        for (key, value) in entries {
            table.insert((*key).to_string(), Value::String((*value).to_string()));
        }
        self.write_table(&table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = TomlFileStorage::new(dir.path().join("selection.toml"));
        assert_eq!(storage.load("theme").unwrap(), None);
    }

    #[test]
    fn batch_write_creates_parent_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("selection.toml");
        let mut storage = TomlFileStorage::new(&path);

        storage
            .store_all(&[("theme", "ocean-blue"), ("darkMode", "false")])
            .unwrap();
        storage.store("font", "serif").unwrap();

        let reopened = TomlFileStorage::new(&path);
        assert_eq!(reopened.load("theme").unwrap().as_deref(), Some("ocean-blue"));
        assert_eq!(reopened.load("darkMode").unwrap().as_deref(), Some("false"));
        assert_eq!(reopened.load("font").unwrap().as_deref(), Some("serif"));
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_an_error_on_read_and_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.toml");
        fs::write(&path, "theme = [unterminated").unwrap();

        let mut storage = TomlFileStorage::new(&path);
        assert!(matches!(
            storage.load("theme"),
            Err(StorageError::Corrupt { .. })
        ));

        storage.store("theme", "tech-cyan").unwrap();
        assert_eq!(storage.load("theme").unwrap().as_deref(), Some("tech-cyan"));
    }

    #[test]
    fn non_string_value_reads_as_absent_and_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.toml");
        fs::write(&path, "theme = \"ocean-blue\"\nfont = \"mono\"\ndarkMode = true\n").unwrap();

        let mut storage = TomlFileStorage::new(&path);
        assert_eq!(storage.load("theme").unwrap().as_deref(), Some("ocean-blue"));
        assert_eq!(storage.load("font").unwrap().as_deref(), Some("mono"));
        assert_eq!(storage.load("darkMode").unwrap(), None);

        storage.store("darkMode", "false").unwrap();
        assert_eq!(storage.load("darkMode").unwrap().as_deref(), Some("false"));
        assert_eq!(storage.load("theme").unwrap().as_deref(), Some("ocean-blue"));
    }

    #[test]
    fn default_path_names_the_selection_file() {
        let path = TomlFileStorage::default_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("selection.toml")
        );
    }
}
