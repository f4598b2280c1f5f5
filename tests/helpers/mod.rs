use anyhow::Result;
use notekeep::application::NoteStore;
use notekeep::constants::NOTES_KEY;
use notekeep::infrastructure::FileKeyValueStore;
use notekeep::util::testing::SequentialIds;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture: a notes directory in a temporary location
#[allow(dead_code)]
pub struct TestNotesDir {
    _temp_dir: TempDir,
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestNotesDir {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let data_dir = temp_dir.path().join("notekeep");

        Ok(Self {
            _temp_dir: temp_dir,
            data_dir,
        })
    }

    /// Path of the notes slot file
    pub fn slot_path(&self) -> PathBuf {
        self.data_dir.join(format!("{NOTES_KEY}.json"))
    }

    /// Write a raw blob into the slot, bypassing the store
    pub fn seed(&self, blob: &str) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::write(self.slot_path(), blob)?;
        Ok(())
    }

    /// Fresh, unloaded store over this directory
    pub fn open_store(&self, first_id: i64) -> NoteStore<FileKeyValueStore, SequentialIds> {
        NoteStore::new(
            FileKeyValueStore::new(&self.data_dir),
            SequentialIds::starting_at(first_id),
        )
    }

    /// Collection as a second, independent store sees it after a load
    pub fn reload(&self) -> Result<Vec<notekeep::domain::Note>> {
        let mut store = self.open_store(1);
        Ok(store.load()?.to_vec())
    }
}

/// Blob with three notes in display order A(1), B(2), C(3)
#[allow(dead_code)]
pub const ABC_BLOB: &str = r#"[
    {"id": 1, "title": "A", "content": "first", "image": null},
    {"id": 2, "title": "B", "content": "second", "image": null},
    {"id": 3, "title": "C", "content": "third", "image": "file:///c.png"}
]"#;
