// src/application/codec.rs
//
// Wire format of the persisted slot: a UTF-8 JSON array of
// `{"id", "title", "content", "image"}` objects in display order.
use crate::domain::{Note, PersistenceError};
use std::collections::HashSet;

pub fn encode(notes: &[Note]) -> Result<String, PersistenceError> {
    serde_json::to_string(notes).map_err(PersistenceError::Serialize)
}

pub fn decode(key: &str, blob: &str) -> Result<Vec<Note>, PersistenceError> {
    let notes: Vec<Note> =
        serde_json::from_str(blob).map_err(|source| PersistenceError::Malformed {
            key: key.to_string(),
            source,
        })?;

    let mut seen = HashSet::with_capacity(notes.len());
    if let Some(dup) = notes.iter().find(|n| !seen.insert(n.id)) {
        return Err(PersistenceError::DuplicateId {
            key: key.to_string(),
            id: dup.id,
        });
    }

    Ok(notes)
}
