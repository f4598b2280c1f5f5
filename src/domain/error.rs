// src/domain/error.rs
use thiserror::Error;

/// Failure of the durable slot holding the notes collection
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to read '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize notes: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Stored notes under '{key}' are malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Stored notes under '{key}' contain duplicate id {id}")]
    DuplicateId { key: String, id: i64 },
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("No id left above {0}")]
    IdsExhausted(i64),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
