//! Persistence layer for the shortcut store
//!
//! The whole mapping is read and rewritten on every operation. Writes go to
//! a temp file next to the real store file and are renamed over it. A
//! symlinked store is resolved first and keeps its permissions.

use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::StoreConfig;
use crate::domain::shortcut::ShortcutStore;
use crate::error::ShortcutError;

/// Storage interface for the shortcut mapping
pub trait ShortcutRepository {
    /// Load the store, degrading to an empty store on any failure
    fn load(&self) -> ShortcutStore;

    /// Replace the persisted store with `store`
    ///
    /// # Errors
    /// Returns `StorageWriteFailed` if the store cannot be written
    fn save(&self, store: &ShortcutStore) -> Result<(), ShortcutError>;
}

/// JSON file backed storage
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
    file: PathBuf,
}

impl JsonFileStorage {
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            dir: config.store_dir(),
            file: config.store_file(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Read and parse the store file
    ///
    /// A missing file is an empty store, not an error.
    ///
    /// # Errors
    /// Returns `StorageUnreadable` if the content is not a JSON object of
    /// strings, or `StorageReadFailed` for any other I/O failure
    pub fn try_load(&self) -> Result<ShortcutStore, ShortcutError> {
        let content = match std::fs::read_to_string(&self.file) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.file.display(),
                    "Shortcut file not found, initializing new storage"
                );
                return Ok(ShortcutStore::new());
            }
            Err(source) => {
                return Err(ShortcutError::StorageReadFailed {
                    path: self.file.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| ShortcutError::StorageUnreadable {
            path: self.file.clone(),
            source,
        })
    }

    /// The file that actually receives writes, with symlinks followed
    fn write_target(&self) -> std::io::Result<PathBuf> {
        match std::fs::canonicalize(&self.file) {
            Ok(resolved) => Ok(resolved),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(self.file.clone()),
            Err(err) => Err(err),
        }
    }

    fn write(&self, store: &ShortcutStore) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        let target = self.write_target()?;
        let parent = target.parent().unwrap_or(&self.dir);

        let data = to_pretty_json(store)?;
        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        temp.write_all(&data)?;
        temp.flush()?;

        if let Ok(existing) = std::fs::metadata(&target) {
            temp.as_file().set_permissions(existing.permissions())?;
        }

        temp.persist(&target).map_err(|err| err.error)?;
        Ok(())
    }
}

impl ShortcutRepository for JsonFileStorage {
    fn load(&self) -> ShortcutStore {
        match self.try_load() {
            Ok(store) => store,
            Err(err @ ShortcutError::StorageUnreadable { .. }) => {
                tracing::warn!("{:#}. Starting fresh", anyhow::Error::new(err));
                ShortcutStore::new()
            }
            Err(err) => {
                tracing::warn!(
                    "Unexpected error while loading shortcuts: {:#}",
                    anyhow::Error::new(err)
                );
                ShortcutStore::new()
            }
        }
    }

    fn save(&self, store: &ShortcutStore) -> Result<(), ShortcutError> {
        self.write(store)
            .map_err(|source| ShortcutError::StorageWriteFailed {
                path: self.file.clone(),
                source,
            })?;
        tracing::debug!(path = %self.file.display(), count = store.len(), "Shortcuts saved");
        Ok(())
    }
}

/// Serialize with 4-space indentation
fn to_pretty_json(store: &ShortcutStore) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    store.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(temp: &tempfile::TempDir) -> JsonFileStorage {
        JsonFileStorage::new(&StoreConfig::new(temp.path()))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp = tempfile::tempdir().unwrap();
        let storage = storage_in(&temp);
        assert!(storage.try_load().unwrap().is_empty());
        assert!(storage.load().is_empty());
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_save_creates_directory_and_indents() {
        let temp = tempfile::tempdir().unwrap();
        let storage = storage_in(&temp);

        let mut store = ShortcutStore::new();
        store.insert("proj", "/home/u/proj");
        store.insert("docs", "/home/u/docs");
        storage.save(&store).unwrap();

        let content = std::fs::read_to_string(storage.path()).unwrap();
        assert_eq!(
            content,
            "{\n    \"proj\": \"/home/u/proj\",\n    \"docs\": \"/home/u/docs\"\n}"
        );
    }

    #[test]
    fn test_save_empty_store() {
        let temp = tempfile::tempdir().unwrap();
        let storage = storage_in(&temp);
        storage.save(&ShortcutStore::new()).unwrap();
        assert_eq!(std::fs::read_to_string(storage.path()).unwrap(), "{}");
    }

    #[test]
    fn test_save_load_roundtrip_is_byte_identical() {
        let temp = tempfile::tempdir().unwrap();
        let storage = storage_in(&temp);

        let mut store = ShortcutStore::new();
        store.insert("b", "/y");
        store.insert("a", "/x");
        storage.save(&store).unwrap();
        let before = std::fs::read(storage.path()).unwrap();

        let loaded = storage.load();
        storage.save(&loaded).unwrap();
        let after = std::fs::read(storage.path()).unwrap();

        assert_eq!(before, after);
        assert_eq!(loaded.entries(), store.entries());
    }

    #[test]
    fn test_corrupt_file_is_unreadable_but_loads_empty() {
        let temp = tempfile::tempdir().unwrap();
        let storage = storage_in(&temp);
        std::fs::create_dir_all(temp.path().join(".cds")).unwrap();
        std::fs::write(storage.path(), "not json").unwrap();

        let err = storage.try_load().unwrap_err();
        assert!(matches!(err, ShortcutError::StorageUnreadable { .. }));

        assert!(storage.load().is_empty());
        // The corrupt content stays until the next save
        assert_eq!(std::fs::read_to_string(storage.path()).unwrap(), "not json");
    }

    #[test]
    fn test_non_string_values_are_unreadable() {
        let temp = tempfile::tempdir().unwrap();
        let storage = storage_in(&temp);
        std::fs::create_dir_all(temp.path().join(".cds")).unwrap();
        std::fs::write(storage.path(), r#"{"a": 42}"#).unwrap();

        assert!(matches!(
            storage.try_load(),
            Err(ShortcutError::StorageUnreadable { .. })
        ));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_file_in_place_of_directory_fails_to_save() {
        let temp = tempfile::tempdir().unwrap();
        let storage = storage_in(&temp);
        // `.cds` exists as a regular file, so the store directory cannot be created
        std::fs::write(temp.path().join(".cds"), "").unwrap();

        let err = storage.save(&ShortcutStore::new()).unwrap_err();
        assert!(matches!(err, ShortcutError::StorageWriteFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_through_symlink_updates_link_target() {
        use std::os::unix::fs::symlink;

        let temp = tempfile::tempdir().unwrap();
        let storage = storage_in(&temp);
        std::fs::create_dir_all(temp.path().join(".cds")).unwrap();
        let dotfile = temp.path().join("dotfiles.json");
        std::fs::write(&dotfile, "{}").unwrap();
        symlink(&dotfile, storage.path()).unwrap();

        let mut store = ShortcutStore::new();
        store.insert("a", "/x");
        storage.save(&store).unwrap();

        let link = std::fs::symlink_metadata(storage.path()).unwrap();
        assert!(link.file_type().is_symlink());
        assert_eq!(
            std::fs::read_to_string(&dotfile).unwrap(),
            "{\n    \"a\": \"/x\"\n}"
        );
        assert_eq!(storage.load().entries(), store.entries());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_existing_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let storage = storage_in(&temp);
        storage.save(&ShortcutStore::new()).unwrap();
        std::fs::set_permissions(storage.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

        let mut store = ShortcutStore::new();
        store.insert("a", "/x");
        storage.save(&store).unwrap();

        let mode = std::fs::metadata(storage.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_unreadable_path_loads_empty() {
        let temp = tempfile::tempdir().unwrap();
        let storage = storage_in(&temp);
        // The store path is a directory, so reading it fails with a non-NotFound error
        std::fs::create_dir_all(storage.path()).unwrap();

        assert!(matches!(
            storage.try_load(),
            Err(ShortcutError::StorageReadFailed { .. })
        ));
        assert!(storage.load().is_empty());
    }
}
