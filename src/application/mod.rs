// src/application/mod.rs
pub mod codec;
pub mod note_editor;
pub mod note_store;
pub mod ports;
pub mod sort;

pub use note_editor::NoteEditor;
pub use note_store::NoteStore;
pub use ports::{IdSource, ImageSource, KeyValueStore};
pub use sort::SortKey;
