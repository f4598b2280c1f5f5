// src/domain/note.rs
use serde::{Deserialize, Serialize};

/// A single note as stored in the collection.
///
/// `image` is a URI to a device-local file. The store only keeps the
/// reference; the file itself is owned by whoever picked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Note {
    /// Case-insensitive substring match against title or content.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }

    pub(crate) fn apply(&mut self, draft: NoteDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.image = draft.image;
    }
}

/// User-editable fields of a note, passed explicitly into add/update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image = Some(uri.into());
        self
    }

    /// True when no field carries anything worth saving
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.content.is_empty() && self.image.is_none()
    }
}

impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            image: note.image.clone(),
        }
    }
}
