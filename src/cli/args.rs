// src/cli/args.rs
use crate::application::SortKey;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (default: platform config dir)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the notes file (overrides config)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, optionally filtered by a case-insensitive search
    List {
        /// Text to look for in title or content
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Show {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note; nothing is stored if every field is empty
    Add {
        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short, long, default_value = "")]
        content: String,

        /// Image file path or URI to attach
        #[arg(short, long, value_name = "IMAGE")]
        image: Option<String>,
    },

    /// Change fields of an existing note
    Edit {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        /// Image file path or URI to attach
        #[arg(short, long, value_name = "IMAGE", conflicts_with = "clear_image")]
        image: Option<String>,

        /// Detach the current image
        #[arg(long)]
        clear_image: bool,
    },

    /// Delete a note
    Delete {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// Reverse the display order of all notes
    Reverse,

    /// Reorder all notes
    Sort {
        #[arg(value_enum, value_name = "KEY")]
        key: SortKey,
    },
}
