// src/infrastructure/image.rs
use crate::application::ImageSource;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::debug;

/// Image "picker" backed by a value given on the command line.
///
/// A value containing `://` is taken as a URI and passed through untouched.
/// Anything else must be an existing file and becomes a `file://` URI.
/// No value means the pick was cancelled.
#[derive(Debug, Clone, Default)]
pub struct PathImageSource {
    selection: Option<String>,
}

impl PathImageSource {
    pub fn new(selection: Option<String>) -> Self {
        Self { selection }
    }
}

impl ImageSource for PathImageSource {
    fn pick_image(&mut self) -> Result<Option<String>> {
        let Some(selection) = self.selection.take() else {
            return Ok(None);
        };

        if selection.contains("://") {
            debug!(uri = %selection, "Using image URI as given");
            return Ok(Some(selection));
        }

        let path = PathBuf::from(&selection)
            .canonicalize()
            .with_context(|| format!("Image not found: {}", selection))?;
        if !path.is_file() {
            bail!("Image is not a file: {}", path.display());
        }

        let uri = format!("file://{}", path.display());
        debug!(%uri, "Resolved image path");
        Ok(Some(uri))
    }
}
