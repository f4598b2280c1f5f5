// src/domain/mod.rs
pub mod error;
pub mod note;

pub use error::{DomainError, PersistenceError};
pub use note::{Note, NoteDraft};
