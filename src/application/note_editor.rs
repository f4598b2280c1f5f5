// src/application/note_editor.rs
use crate::application::ports::{IdSource, ImageSource, KeyValueStore};
use crate::application::NoteStore;
use crate::domain::{DomainError, Note, NoteDraft};
use anyhow::Result;
use tracing::debug;

/// One edit session: a draft for either a new note or an existing one.
///
/// The draft is owned here and handed to the store explicitly on save, so
/// nothing transient leaks into the store.
#[derive(Debug, Clone)]
pub struct NoteEditor {
    target: Option<i64>,
    draft: NoteDraft,
}

impl NoteEditor {
    /// Blank draft for a note that does not exist yet
    pub fn create() -> Self {
        Self {
            target: None,
            draft: NoteDraft::default(),
        }
    }

    /// Draft pre-filled from `note`
    pub fn edit(note: &Note) -> Self {
        Self {
            target: Some(note.id),
            draft: NoteDraft::from(note),
        }
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    pub fn set_image(&mut self, uri: impl Into<String>) {
        self.draft.image = Some(uri.into());
    }

    pub fn clear_image(&mut self) {
        self.draft.image = None;
    }

    /// Ask `source` for an image. Returns false when the pick was cancelled,
    /// in which case the current image is kept.
    pub fn pick_image(&mut self, source: &mut dyn ImageSource) -> Result<bool> {
        match source.pick_image()? {
            Some(uri) => {
                debug!(image = %uri, "Image attached to draft");
                self.draft.image = Some(uri);
                Ok(true)
            }
            None => {
                debug!("Image pick cancelled");
                Ok(false)
            }
        }
    }

    /// Commit the draft: add a new note or update the edited one
    pub fn save<S: KeyValueStore, I: IdSource>(
        self,
        store: &mut NoteStore<S, I>,
    ) -> Result<Note, DomainError> {
        match self.target {
            Some(id) => store.update(id, self.draft),
            None => store.add(self.draft),
        }
    }

    /// Dismiss the session. A blank draft is discarded without touching the
    /// store; anything else is saved.
    pub fn close<S: KeyValueStore, I: IdSource>(
        self,
        store: &mut NoteStore<S, I>,
    ) -> Result<Option<Note>, DomainError> {
        if self.draft.is_blank() {
            debug!(note_id = ?self.target, "Discarding blank draft");
            return Ok(None);
        }
        self.save(store).map(Some)
    }
}
