// src/infrastructure/file_store.rs
use crate::application::KeyValueStore;
use crate::constants::SLOT_FILE_EXTENSION;
use crate::domain::PersistenceError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument, trace};

/// Key-value slots stored as one JSON file per key inside `dir`.
///
/// Writes go to a temp file in the same directory which is then renamed over
/// the slot, so readers see either the old or the new blob, never a mix.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{SLOT_FILE_EXTENSION}")))
    }
}

fn validate_key(key: &str) -> Result<(), PersistenceError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(PersistenceError::InvalidKey(key.to_string()))
    }
}

impl KeyValueStore for FileKeyValueStore {
    #[instrument(level = "debug", skip(self))]
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.slot_path(key)?;

        match fs::read_to_string(&path) {
            Ok(blob) => {
                trace!(?path, bytes = blob.len(), "Read slot");
                Ok(Some(blob))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(?path, "Slot does not exist");
                Ok(None)
            }
            Err(source) => Err(PersistenceError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    #[instrument(level = "debug", skip(self, blob), fields(bytes = blob.len()))]
    fn write(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        let path = self.slot_path(key)?;
        let write_err = |source| PersistenceError::Write {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(blob.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&path).map_err(|e| write_err(e.error))?;

        debug!(?path, "Wrote slot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_missing_slot_when_reading_then_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        let result = store.read("notes").unwrap();

        assert_eq!(result, None);
    }

    #[test]
    fn given_written_slot_when_reading_then_returns_blob() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileKeyValueStore::new(temp_dir.path());

        store.write("notes", "[]").unwrap();

        assert_eq!(store.read("notes").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("notes.json").exists());
    }

    #[test]
    fn given_existing_slot_when_writing_then_replaces_blob_without_leftovers() {
        // Arrange
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileKeyValueStore::new(temp_dir.path());
        store.write("notes", "[1]").unwrap();

        // Act
        store.write("notes", "[2]").unwrap();

        // Assert
        assert_eq!(store.read("notes").unwrap().as_deref(), Some("[2]"));
        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "Temp files should be renamed away");
    }

    #[test]
    fn given_missing_directory_when_writing_then_creates_it() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b");
        let mut store = FileKeyValueStore::new(&nested);

        store.write("notes", "[]").unwrap();

        assert_eq!(store.dir(), nested.as_path());
        assert!(nested.join("notes.json").exists());
    }

    #[test]
    fn given_directory_is_a_file_when_writing_then_returns_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let mut store = FileKeyValueStore::new(&blocker);

        let result = store.write("notes", "[]");

        assert!(matches!(result, Err(PersistenceError::Write { .. })));
    }

    #[test]
    fn given_path_like_keys_when_resolving_then_rejects_them() {
        let store = FileKeyValueStore::new("/tmp");

        for key in ["", "../notes", "a/b", ".hidden", "with space"] {
            assert!(
                matches!(store.slot_path(key), Err(PersistenceError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
        assert!(store.slot_path("notes-v1.backup").is_ok());
    }
}
