// Tests for AnswerStore
// Test cases:
// - record() upserts by exact question and skips empty input
// - add/update/delete with validation and case-insensitive duplicate check
// - Entries persist in order across reload
// - Export/import round trip through the JSON document
// - Mutations emit saved_entries_updated events
// - A failed write restores the previous entries without emitting

use super::*;
use crate::events::tests::MockEventEmitter;
use tempfile::TempDir;

/// Helper to create a store with a temporary config path
fn create_test_store() -> (AnswerStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved_entries.json");
    let store = AnswerStore::new(config_path);
    (store, temp_dir)
}

#[test]
fn test_record_adds_then_updates_exact_question() {
    let (mut store, _temp_dir) = create_test_store();

    assert_eq!(store.record("Email", "a@b.com").unwrap(), RecordOutcome::Added);
    assert_eq!(store.record("Email", "c@d.com").unwrap(), RecordOutcome::Updated);
    // Recorder is case-sensitive: a differently cased label is a new entry
    assert_eq!(store.record("email", "e@f.com").unwrap(), RecordOutcome::Added);

    let entries = store.list();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].answer, "c@d.com");
    assert_eq!(entries[1].question, "email");
}

#[test]
fn test_record_trims_and_skips_empty() {
    let (mut store, _temp_dir) = create_test_store();

    assert_eq!(store.record("  Name ", "   ").unwrap(), RecordOutcome::Skipped);
    assert_eq!(store.record("", "value").unwrap(), RecordOutcome::Skipped);
    assert_eq!(store.record("  Name ", " Ada ").unwrap(), RecordOutcome::Added);

    assert_eq!(
        store.get(0),
        Some(&StoredEntry {
            question: "Name".to_string(),
            answer: "Ada".to_string(),
        })
    );
}

#[test]
fn test_add_rejects_case_insensitive_duplicates() {
    let (mut store, _temp_dir) = create_test_store();

    store.add("Phone Number", "555").unwrap();
    let result = store.add("phone number", "777");

    assert!(matches!(result, Err(AnswerStoreError::DuplicateQuestion(_))));
    assert_eq!(store.list().len(), 1);
}

#[test]
fn test_add_requires_both_fields() {
    let (mut store, _temp_dir) = create_test_store();

    assert_eq!(store.add(" ", "x"), Err(AnswerStoreError::EmptyField));
    assert_eq!(store.add("Q", ""), Err(AnswerStoreError::EmptyField));
}

#[test]
fn test_update_and_delete_by_index() {
    let (mut store, _temp_dir) = create_test_store();
    store.add("City", "Paris").unwrap();
    store.add("Country", "France").unwrap();

    let updated = store.update(1, "Country", "Italy").unwrap();
    assert_eq!(updated.answer, "Italy");

    let removed = store.delete(0).unwrap();
    assert_eq!(removed.question, "City");
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.list()[0].answer, "Italy");
}

#[test]
fn test_update_delete_out_of_range() {
    let (mut store, _temp_dir) = create_test_store();

    assert_eq!(store.update(3, "Q", "A"), Err(AnswerStoreError::NotFound(3)));
    assert_eq!(store.delete(0), Err(AnswerStoreError::NotFound(0)));
}

#[test]
fn test_entries_persist_in_order_across_reload() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved_entries.json");

    {
        let mut store = AnswerStore::new(config_path.clone());
        store.record("First name", "Ada").unwrap();
        store.record("Last name", "Lovelace").unwrap();
        store.record("Email", "ada@example.com").unwrap();
    }

    let mut reloaded = AnswerStore::new(config_path);
    reloaded.load().unwrap();

    let questions: Vec<&str> = reloaded.list().iter().map(|e| e.question.as_str()).collect();
    assert_eq!(questions, vec!["First name", "Last name", "Email"]);
}

#[test]
fn test_load_missing_file_is_empty() {
    let (mut store, _temp_dir) = create_test_store();

    store.load().unwrap();

    assert!(store.list().is_empty());
}

#[test]
fn test_load_corrupt_file_is_error() {
    let (mut store, temp_dir) = create_test_store();
    std::fs::write(temp_dir.path().join("saved_entries.json"), "[{").unwrap();

    assert!(matches!(store.load(), Err(AnswerStoreError::LoadError(_))));
}

#[test]
fn test_export_then_import_into_fresh_store() {
    let (mut source, _source_dir) = create_test_store();
    source.add("Email", "x@y.com").unwrap();
    source.add("Phone", "555").unwrap();
    let exported = source.export_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&exported).unwrap();
    assert!(value["exportedAt"].is_string());
    assert_eq!(value["savedEntries"].as_array().unwrap().len(), 2);

    let (mut target, _target_dir) = create_test_store();
    target.record("Old", "value").unwrap();
    let count = target.import_json(&exported).unwrap();

    assert_eq!(count, 2);
    assert_eq!(target.list(), source.list());
}

#[test]
fn test_import_bare_array_drops_incomplete_entries() {
    let (mut store, _temp_dir) = create_test_store();
    let json = r#"[
        {"question": "Email", "answer": "x@y.com"},
        {"question": "No answer"},
        {"question": "", "answer": "orphan"}
    ]"#;

    assert_eq!(store.import_json(json).unwrap(), 1);
    assert_eq!(store.list()[0].question, "Email");
}

#[test]
fn test_import_rejects_unknown_document() {
    let (mut store, _temp_dir) = create_test_store();
    store.record("Keep", "me").unwrap();

    let result = store.import_json(r#"{"somethingElse": true}"#);

    assert!(matches!(result, Err(AnswerStoreError::InvalidImport(_))));
    assert_eq!(store.list().len(), 1);
}

#[test]
fn test_mutations_emit_events() {
    let (store, _temp_dir) = create_test_store();
    let emitter = Arc::new(MockEventEmitter::new());
    let mut store = store.with_emitter(emitter.clone());

    store.record("Email", "x@y.com").unwrap();
    store.record("Email", "z@y.com").unwrap();
    store.delete(0).unwrap();
    store.record("", "").unwrap();

    let events = emitter.saved_entries_events.lock().unwrap();
    let actions: Vec<UpdateAction> = events.iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![UpdateAction::Add, UpdateAction::Update, UpdateAction::Delete]
    );
    assert_eq!(events[2].total, 0);
}

#[test]
fn test_failed_write_rolls_back_and_stays_silent() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let emitter = Arc::new(MockEventEmitter::new());
    let mut store =
        AnswerStore::new(blocker.join("saved_entries.json")).with_emitter(emitter.clone());

    let added = store.add("Email", "a@b.com");
    let recorded = store.record("Name", "Ada");

    assert!(matches!(added, Err(AnswerStoreError::PersistenceError(_))));
    assert!(matches!(recorded, Err(AnswerStoreError::PersistenceError(_))));
    assert!(store.list().is_empty());
    assert!(emitter.saved_entries_events.lock().unwrap().is_empty());
}
