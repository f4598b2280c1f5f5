// src/application/sort.rs
use crate::domain::Note;
use clap::ValueEnum;
use std::cmp::Ordering;

/// Canned comparators for `NoteStore::sort_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Most recently created first
    Newest,
    /// Oldest first
    Oldest,
    /// Alphabetical by title, ignoring case
    Title,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Title => "title",
        }
    }

    pub fn compare(self, a: &Note, b: &Note) -> Ordering {
        match self {
            SortKey::Newest => b.id.cmp(&a.id),
            SortKey::Oldest => a.id.cmp(&b.id),
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    }
}
