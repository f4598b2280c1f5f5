mod helpers;

use anyhow::Result;
use helpers::{TestNotesDir, ABC_BLOB};
use notekeep::domain::{DomainError, NoteDraft, PersistenceError};

fn ids(notes: &[notekeep::domain::Note]) -> Vec<i64> {
    notes.iter().map(|n| n.id).collect()
}

#[test]
fn given_empty_dir_when_adding_then_note_is_persisted() -> Result<()> {
    // Arrange
    let dir = TestNotesDir::new()?;
    let mut store = dir.open_store(1);
    store.load()?;

    // Act
    store.add(NoteDraft::new("Groceries", "Milk, eggs"))?;

    // Assert
    let reloaded = dir.reload()?;
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].title, "Groceries");
    assert_eq!(reloaded[0].content, "Milk, eggs");
    assert_eq!(reloaded[0].image, None);
    Ok(())
}

#[test]
fn given_sequence_of_mutations_when_reloading_after_each_then_matches_memory() -> Result<()> {
    let dir = TestNotesDir::new()?;
    let mut store = dir.open_store(1);
    store.load()?;

    let a = store.add(NoteDraft::new("A", "alpha"))?;
    assert_eq!(dir.reload()?, store.notes());

    let b = store.add(NoteDraft::new("B", "beta").with_image("file:///b.png"))?;
    assert_eq!(dir.reload()?, store.notes());

    store.update(a.id, NoteDraft::new("A2", "alpha, revised"))?;
    assert_eq!(dir.reload()?, store.notes());

    store.reverse_order()?;
    assert_eq!(dir.reload()?, store.notes());

    store.remove(b.id)?;
    assert_eq!(dir.reload()?, store.notes());

    store.remove(b.id)?;
    assert_eq!(dir.reload()?, store.notes());
    Ok(())
}

#[test]
fn given_many_adds_when_adding_then_ids_are_unique() -> Result<()> {
    let dir = TestNotesDir::new()?;
    let mut store = dir.open_store(1);
    store.load()?;

    for i in 0..20 {
        let before = ids(store.notes());
        let note = store.add(NoteDraft::new(format!("n{i}"), ""))?;
        assert!(!before.contains(&note.id));
    }
    Ok(())
}

#[test]
fn given_seeded_ids_when_id_source_collides_then_add_still_unique() -> Result<()> {
    // Arrange: source starts at 2, which the seed already uses
    let dir = TestNotesDir::new()?;
    dir.seed(ABC_BLOB)?;
    let mut store = dir.open_store(2);
    store.load()?;

    // Act
    let note = store.add(NoteDraft::new("D", ""))?;

    // Assert
    assert_eq!(note.id, 4);
    assert_eq!(ids(store.notes()), vec![4, 1, 2, 3]);
    Ok(())
}

#[test]
fn given_three_notes_when_reversing_then_order_is_c_b_a() -> Result<()> {
    // Arrange: display order ids 3, 2, 1
    let dir = TestNotesDir::new()?;
    dir.seed(
        r#"[{"id":3,"title":"A","content":""},{"id":2,"title":"B","content":""},{"id":1,"title":"C","content":""}]"#,
    )?;
    let mut store = dir.open_store(10);
    store.load()?;

    // Act
    let reversed = ids(store.reverse_order()?);

    // Assert
    assert_eq!(reversed, vec![1, 2, 3]);
    assert_eq!(ids(&dir.reload()?), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn given_any_collection_when_reversing_twice_then_original_order() -> Result<()> {
    let dir = TestNotesDir::new()?;
    dir.seed(ABC_BLOB)?;
    let mut store = dir.open_store(10);
    let original = store.load()?.to_vec();

    store.reverse_order()?;
    store.reverse_order()?;

    assert_eq!(store.notes(), original.as_slice());
    Ok(())
}

#[test]
fn given_abc_when_updating_b_then_only_b_changes() -> Result<()> {
    // Arrange
    let dir = TestNotesDir::new()?;
    dir.seed(ABC_BLOB)?;
    let mut store = dir.open_store(10);
    store.load()?;

    // Act
    store.update(2, NoteDraft::new("B2", "updated"))?;

    // Assert
    let notes = dir.reload()?;
    assert_eq!(ids(&notes), vec![1, 2, 3]);
    assert_eq!(notes[0].title, "A");
    assert_eq!(notes[1].title, "B2");
    assert_eq!(notes[1].content, "updated");
    assert_eq!(notes[2].title, "C");
    Ok(())
}

#[test]
fn given_removed_note_when_searching_everything_then_absent() -> Result<()> {
    let dir = TestNotesDir::new()?;
    dir.seed(ABC_BLOB)?;
    let mut store = dir.open_store(10);
    store.load()?;

    let removed = store.remove(3)?;

    assert_eq!(removed.and_then(|n| n.image).as_deref(), Some("file:///c.png"));
    assert!(store.search("").iter().all(|n| n.id != 3));
    Ok(())
}

#[test]
fn given_query_when_searching_then_partitions_collection() -> Result<()> {
    // Arrange
    let dir = TestNotesDir::new()?;
    dir.seed(ABC_BLOB)?;
    let mut store = dir.open_store(10);
    store.load()?;
    store.add(NoteDraft::new("Shopping", "FIREWOOD"))?;
    let query = "fir";

    // Act
    let found = store.search(query);

    // Assert
    let matches = |n: &notekeep::domain::Note| {
        n.title.to_lowercase().contains(query) || n.content.to_lowercase().contains(query)
    };
    assert!(found.iter().all(|n| matches(n)));
    let found_ids: Vec<i64> = found.iter().map(|n| n.id).collect();
    for note in store.notes() {
        assert_eq!(found_ids.contains(&note.id), matches(note));
    }
    assert_eq!(found.len(), 2, "'first' and 'FIREWOOD' both match");
    Ok(())
}

#[test]
fn given_corrupt_slot_when_loading_then_persistence_error_and_memory_unchanged() -> Result<()> {
    // Arrange
    let dir = TestNotesDir::new()?;
    dir.seed(ABC_BLOB)?;
    let mut store = dir.open_store(10);
    store.load()?;
    dir.seed("{ this is not json")?;

    // Act
    let result = store.load();

    // Assert
    assert!(matches!(
        result,
        Err(DomainError::Persistence(PersistenceError::Malformed { .. }))
    ));
    assert_eq!(ids(store.notes()), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn given_corrupt_slot_when_mutating_unloaded_store_then_fails_without_overwriting() -> Result<()> {
    // Arrange
    let dir = TestNotesDir::new()?;
    dir.seed("garbage")?;
    let mut store = dir.open_store(10);

    // Act
    let result = store.add(NoteDraft::new("New", ""));

    // Assert
    assert!(matches!(result, Err(DomainError::Persistence(_))));
    assert_eq!(std::fs::read_to_string(dir.slot_path())?, "garbage");
    Ok(())
}

#[test]
fn given_unknown_id_when_updating_then_not_found_and_slot_untouched() -> Result<()> {
    let dir = TestNotesDir::new()?;
    dir.seed(ABC_BLOB)?;
    let mut store = dir.open_store(10);
    store.load()?;

    let result = store.update(42, NoteDraft::new("x", "y"));

    match result {
        Err(DomainError::NoteNotFound(id)) => assert_eq!(id, 42),
        other => panic!("Expected NoteNotFound, got {:?}", other),
    }
    assert_eq!(std::fs::read_to_string(dir.slot_path())?, ABC_BLOB);
    Ok(())
}
