// src/ports/text.rs
use crate::domain::Note;
use crate::util::text::{display_title, preview};
use tracing::instrument;

/// Shown when a listing has nothing to show
pub const EMPTY_LIST_MESSAGE: &str = "No notes yet. Create one with `notekeep add`.";
pub const NO_MATCHES_MESSAGE: &str = "No notes match the search.";

/// Plain-text rendering of notes for the terminal
#[derive(Debug, Clone)]
pub struct TextPresenter {
    preview_lines: usize,
}

impl TextPresenter {
    pub fn new(preview_lines: usize) -> Self {
        Self { preview_lines }
    }

    /// Compact listing: header line per note, content cut to the preview size
    #[instrument(level = "trace", skip(self, notes), fields(count = notes.len()))]
    pub fn render_list(&self, notes: &[&Note], searching: bool) -> String {
        if notes.is_empty() {
            return if searching {
                NO_MATCHES_MESSAGE.to_string()
            } else {
                EMPTY_LIST_MESSAGE.to_string()
            };
        }

        notes
            .iter()
            .map(|note| self.render_entry(note))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn render_entry(&self, note: &Note) -> String {
        let mut out = format!("[{}] {}", note.id, display_title(&note.title, &note.content));
        if note.image.is_some() {
            out.push_str(" (image)");
        }

        let (shown, elided) = preview(&note.content, self.preview_lines);
        for line in shown.lines() {
            out.push_str("\n    ");
            out.push_str(line);
        }
        if elided {
            out.push_str("\n    ...");
        }
        out
    }

    /// Full note
    pub fn render_note(&self, note: &Note) -> String {
        let mut out = format!("id:      {}\ntitle:   {}\n", note.id, note.title);
        if let Some(uri) = &note.image {
            out.push_str(&format!("image:   {}\n", uri));
        }
        out.push('\n');
        out.push_str(&note.content);
        out
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_PREVIEW_LINES)
    }
}
