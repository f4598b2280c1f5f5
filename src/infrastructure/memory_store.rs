// src/infrastructure/memory_store.rs
use crate::application::KeyValueStore;
use crate::domain::PersistenceError;
use std::collections::HashMap;

/// In-process slots, for embedding the store without a filesystem
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    slots: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        self.slots.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
