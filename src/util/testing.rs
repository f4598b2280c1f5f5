// src/util/testing.rs

use anyhow::Result;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{IdSource, ImageSource, KeyValueStore};
use crate::domain::PersistenceError;
use crate::infrastructure::MemoryKeyValueStore;

/// In-memory storage whose reads and writes can be made to fail on demand
///
/// # Examples
///
/// ```
/// use notekeep::application::KeyValueStore;
/// use notekeep::util::testing::FlakyStore;
///
/// let mut storage = FlakyStore::new();
/// storage.write("notes", "[]").unwrap();
/// storage.fail_writes(true);
/// assert!(storage.write("notes", "[1]").is_err());
/// assert_eq!(storage.read("notes").unwrap().as_deref(), Some("[]"));
/// ```
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryKeyValueStore,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for FlakyStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if self.fail_reads {
            return Err(PersistenceError::Read {
                key: key.to_string(),
                source: io::Error::other("injected read failure"),
            });
        }
        self.inner.read(key)
    }

    fn write(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Write {
                key: key.to_string(),
                source: io::Error::other("injected write failure"),
            });
        }
        self.inner.write(key, blob)?;
        self.writes += 1;
        Ok(())
    }
}

/// Deterministic ids: `start`, `start + 1`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: i64,
}

impl SequentialIds {
    pub fn starting_at(start: i64) -> Self {
        Self { next: start }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Image source returning a fixed answer
#[derive(Debug, Clone)]
pub struct ScriptedImageSource {
    answer: Option<String>,
}

impl ScriptedImageSource {
    pub fn picked(uri: impl Into<String>) -> Self {
        Self {
            answer: Some(uri.into()),
        }
    }

    pub fn cancelled() -> Self {
        Self { answer: None }
    }
}

impl ImageSource for ScriptedImageSource {
    fn pick_image(&mut self) -> Result<Option<String>> {
        Ok(self.answer.clone())
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // RUST_LOG wins, otherwise trace our own crate
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("notekeep=trace"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
