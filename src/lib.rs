// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::cli::args::{Args, Command};
use anyhow::{Context, Result};
use application::{IdSource, KeyValueStore, NoteEditor, NoteStore};
use domain::DomainError;
use infrastructure::{ClockIdSource, Config, FileKeyValueStore, PathImageSource};
use ports::TextPresenter;
use std::path::Path;
use tracing::debug;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notekeep with arguments");

    // Initialize infrastructure
    let config = load_config(args.config.as_deref())?;
    let data_dir = config.resolve_data_dir(args.data_dir.as_deref())?;
    debug!(?data_dir, key = %config.storage.key, "Using notes slot");

    let storage = FileKeyValueStore::new(&data_dir);
    let mut store = NoteStore::with_key(storage, ClockIdSource::new(), config.storage.key.clone());
    store
        .load()
        .with_context(|| format!("Failed to load notes from {}", data_dir.display()))?;

    // Initialize presentation
    let presenter = TextPresenter::new(config.display.preview_lines);

    // Execute use case
    let output = execute(args.command, &mut store, &presenter)?;
    println!("{output}");

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(path),
            None => Ok(Config::default()),
        },
    }
}

/// Run one command against a loaded store and return what to print
pub fn execute<S: KeyValueStore, I: IdSource>(
    command: Command,
    store: &mut NoteStore<S, I>,
    presenter: &TextPresenter,
) -> Result<String> {
    match command {
        Command::List { search, json } => {
            let query = search.as_deref().unwrap_or("");
            let notes = store.search(query);
            debug!(query, matches = notes.len(), "Listing notes");

            if json {
                Ok(serde_json::to_string_pretty(&notes)?)
            } else {
                Ok(presenter.render_list(&notes, !query.is_empty()))
            }
        }

        Command::Show { note_id, json } => {
            let note = store
                .get(note_id)
                .ok_or(DomainError::NoteNotFound(note_id))?;

            if json {
                Ok(serde_json::to_string_pretty(note)?)
            } else {
                Ok(presenter.render_note(note))
            }
        }

        Command::Add {
            title,
            content,
            image,
        } => {
            let mut editor = NoteEditor::create();
            editor.set_title(title);
            editor.set_content(content);
            editor.pick_image(&mut PathImageSource::new(image))?;

            match editor.close(store)? {
                Some(note) => Ok(format!("Added note {}", note.id)),
                None => Ok("Nothing to save: the note is empty".to_string()),
            }
        }

        Command::Edit {
            note_id,
            title,
            content,
            image,
            clear_image,
        } => {
            let note = store
                .get(note_id)
                .ok_or(DomainError::NoteNotFound(note_id))?;
            let mut editor = NoteEditor::edit(note);

            if let Some(title) = title {
                editor.set_title(title);
            }
            if let Some(content) = content {
                editor.set_content(content);
            }
            if clear_image {
                editor.clear_image();
            } else {
                editor.pick_image(&mut PathImageSource::new(image))?;
            }

            let note = editor.save(store)?;
            Ok(format!("Updated note {}", note.id))
        }

        Command::Delete { note_id } => match store.remove(note_id)? {
            Some(note) => Ok(match note.image {
                Some(uri) => format!("Deleted note {note_id} (image left in place: {uri})"),
                None => format!("Deleted note {note_id}"),
            }),
            None => Ok(format!("Note {note_id} does not exist, nothing deleted")),
        },

        Command::Reverse => {
            let count = store.reverse_order()?.len();
            Ok(format!("Reversed order of {count} notes"))
        }

        Command::Sort { key } => {
            let count = store.sort_by(|a, b| key.compare(a, b))?.len();
            Ok(format!("Sorted {count} notes by {}", key.as_str()))
        }
    }
}
