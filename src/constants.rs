// src/constants.rs
//
// Application-wide constants.

/// Storage key of the notes collection slot.
///
/// The file adapter stores the slot as `<data_dir>/<key>.json`.
pub const NOTES_KEY: &str = "notes";

/// Directory name under the platform data/config dirs.
pub const APP_DIR_NAME: &str = "notekeep";

/// Config file name inside the platform config dir.
pub const CONFIG_FILE_NAME: &str = "notekeep.toml";

/// Content lines shown per note in list output before eliding the rest.
pub const DEFAULT_PREVIEW_LINES: usize = 4;

/// Extension of slot files written by the file adapter.
pub const SLOT_FILE_EXTENSION: &str = "json";
