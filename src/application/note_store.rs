// src/application/note_store.rs
use crate::application::codec;
use crate::application::ports::{IdSource, KeyValueStore};
use crate::constants::NOTES_KEY;
use crate::domain::{DomainError, Note, NoteDraft};
use std::cmp::Ordering;
use tracing::{debug, info, instrument, warn};

/// Ordered notes collection kept in sync with a single durable slot.
///
/// Every mutation builds the next collection, writes it, and only then
/// replaces the in-memory state. A failed write leaves memory exactly as it
/// was before the call.
pub struct NoteStore<S: KeyValueStore, I: IdSource> {
    storage: S,
    ids: I,
    key: String,
    notes: Vec<Note>,
    loaded: bool,
}

impl<S: KeyValueStore, I: IdSource> NoteStore<S, I> {
    pub fn new(storage: S, ids: I) -> Self {
        Self::with_key(storage, ids, NOTES_KEY)
    }

    pub fn with_key(storage: S, ids: I, key: impl Into<String>) -> Self {
        Self {
            storage,
            ids,
            key: key.into(),
            notes: Vec::new(),
            loaded: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Current collection in display order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the in-memory collection with the persisted one.
    ///
    /// An absent slot yields an empty collection. A present but malformed
    /// slot is an error and leaves the in-memory collection untouched.
    #[instrument(level = "debug", skip(self), fields(key = %self.key))]
    pub fn load(&mut self) -> Result<&[Note], DomainError> {
        let notes = match self.storage.read(&self.key)? {
            Some(blob) => codec::decode(&self.key, &blob)?,
            None => {
                debug!("No stored notes, starting empty");
                Vec::new()
            }
        };

        info!(count = notes.len(), "Loaded notes");
        self.notes = notes;
        self.loaded = true;
        Ok(&self.notes)
    }

    /// Create a note from `draft` at the head of the collection
    #[instrument(level = "debug", skip(self, draft))]
    pub fn add(&mut self, draft: NoteDraft) -> Result<Note, DomainError> {
        self.ensure_loaded()?;

        let note = Note {
            id: self.fresh_id()?,
            title: draft.title,
            content: draft.content,
            image: draft.image,
        };

        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(note.clone());
        next.extend(self.notes.iter().cloned());
        self.commit(next)?;

        info!(note_id = note.id, "Added note");
        Ok(note)
    }

    /// Replace the editable fields of note `id`, keeping its position
    #[instrument(level = "debug", skip(self, draft))]
    pub fn update(&mut self, id: i64, draft: NoteDraft) -> Result<Note, DomainError> {
        self.ensure_loaded()?;

        let pos = self.position(id).ok_or(DomainError::NoteNotFound(id))?;
        let mut next = self.notes.clone();
        next[pos].apply(draft);
        let updated = next[pos].clone();
        self.commit(next)?;

        info!(note_id = id, "Updated note");
        Ok(updated)
    }

    /// Remove note `id`. An unknown id is not an error.
    ///
    /// Returns the removed note so the caller can deal with its image file,
    /// which the store never deletes.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: i64) -> Result<Option<Note>, DomainError> {
        self.ensure_loaded()?;

        let Some(pos) = self.position(id) else {
            debug!(note_id = id, "Note already absent, nothing to remove");
            return Ok(None);
        };

        let mut next = self.notes.clone();
        let removed = next.remove(pos);
        self.commit(next)?;

        info!(note_id = id, "Removed note");
        if let Some(uri) = &removed.image {
            warn!(note_id = id, image = %uri, "Removed note referenced an image that is left in place");
        }
        Ok(Some(removed))
    }

    /// Reverse the display order of the whole collection
    #[instrument(level = "debug", skip(self))]
    pub fn reverse_order(&mut self) -> Result<&[Note], DomainError> {
        self.ensure_loaded()?;

        let mut next = self.notes.clone();
        next.reverse();
        self.commit(next)?;

        info!(count = self.notes.len(), "Reversed note order");
        Ok(&self.notes)
    }

    /// Reorder the collection with an explicit comparator (stable)
    pub fn sort_by<F>(&mut self, compare: F) -> Result<&[Note], DomainError>
    where
        F: FnMut(&Note, &Note) -> Ordering,
    {
        self.ensure_loaded()?;

        let mut next = self.notes.clone();
        next.sort_by(compare);
        self.commit(next)?;

        info!(count = self.notes.len(), "Sorted notes");
        Ok(&self.notes)
    }

    /// Notes whose title or content contains `query`, ignoring case.
    ///
    /// An empty query returns the whole collection.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        if query.is_empty() {
            return self.notes.iter().collect();
        }

        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| n.matches_lowercase(&needle))
            .collect()
    }

    fn ensure_loaded(&mut self) -> Result<(), DomainError> {
        if !self.loaded {
            debug!("Store not loaded yet, loading before mutation");
            self.load()?;
        }
        Ok(())
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    /// Next id from the source, lifted above every id already stored so ids
    /// keep increasing even when the source lags behind the collection.
    fn fresh_id(&mut self) -> Result<i64, DomainError> {
        let candidate = self.ids.next_id();
        let Some(max) = self.notes.iter().map(|n| n.id).max() else {
            return Ok(candidate);
        };
        if candidate > max {
            return Ok(candidate);
        }

        let bumped = max.checked_add(1).ok_or(DomainError::IdsExhausted(max))?;
        warn!(candidate, bumped, "Id source is behind the stored ids");
        Ok(bumped)
    }

    fn commit(&mut self, next: Vec<Note>) -> Result<(), DomainError> {
        let blob = codec::encode(&next)?;
        self.storage.write(&self.key, &blob)?;
        self.notes = next;

        debug!(count = self.notes.len(), "Committed notes");
        Ok(())
    }
}
