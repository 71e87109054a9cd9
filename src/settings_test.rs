use super::*;
use crate::events::tests::MockEventEmitter;
use tempfile::TempDir;

fn create_test_store() -> (PreferencesStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = PreferencesStore::new(temp_dir.path().join("preferences.json"));
    (store, temp_dir)
}

#[test]
fn test_defaults_when_file_missing() {
    let (mut store, _temp_dir) = create_test_store();

    store.load().unwrap();

    let prefs = store.preferences();
    assert!(!prefs.record_form_data);
    assert!(prefs.autofill_enabled);
}

#[test]
fn test_toggles_persist_across_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("preferences.json");

    {
        let mut store = PreferencesStore::new(path.clone());
        store.set_record_form_data(true).unwrap();
        store.set_autofill_enabled(false).unwrap();
    }

    let mut reloaded = PreferencesStore::new(path);
    reloaded.load().unwrap();

    assert_eq!(
        reloaded.preferences(),
        Preferences {
            record_form_data: true,
            autofill_enabled: false,
        }
    );
}

#[test]
fn test_partial_file_keeps_defaults() {
    let (mut store, temp_dir) = create_test_store();
    std::fs::write(
        temp_dir.path().join("preferences.json"),
        r#"{"recordFormData": true}"#,
    )
    .unwrap();

    store.load().unwrap();

    assert!(store.preferences().record_form_data);
    assert!(store.preferences().autofill_enabled);
}

#[test]
fn test_corrupt_file_is_load_error() {
    let (mut store, temp_dir) = create_test_store();
    std::fs::write(temp_dir.path().join("preferences.json"), "nope").unwrap();

    assert!(matches!(store.load(), Err(PreferencesError::LoadError(_))));
}

#[test]
fn test_change_emits_event() {
    let (store, _temp_dir) = create_test_store();
    let emitter = Arc::new(MockEventEmitter::new());
    let mut store = store.with_emitter(emitter.clone());

    store.set_record_form_data(true).unwrap();

    let events = emitter.preferences_events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert!(events[0].record_form_data);
    assert!(events[0].autofill_enabled);
}
