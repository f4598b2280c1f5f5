// src/application/ports.rs
use crate::domain::PersistenceError;
use anyhow::Result;

/// Durable storage of one opaque blob per key
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing has been written under `key` yet
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    fn write(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError>;
}

/// Source of monotonically increasing note ids
pub trait IdSource {
    fn next_id(&mut self) -> i64;
}

/// Image selection collaborator.
///
/// Yields a URI for the picked image, or `None` when the user cancelled.
pub trait ImageSource {
    fn pick_image(&mut self) -> Result<Option<String>>;
}
