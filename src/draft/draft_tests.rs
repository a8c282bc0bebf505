use super::*;
use crate::config::DataPaths;
use serde_json::json;

fn doc(value: serde_json::Value) -> Document {
    value.as_object().cloned().expect("object literal")
}

fn file_store() -> (tempfile::TempDir, FileDraftStore) {
    let root = tempfile::tempdir().expect("temp root");
    let store = FileDraftStore::new(DataPaths::new(root.path().to_path_buf()));
    (root, store)
}

#[test]
fn save_then_load_returns_saved_document() {
    let (_root, mut store) = file_store();
    let saved = doc(json!({"cif": 12.5, "barang": [{"seriBarang": 1}]}));
    store.save("A", &saved);
    assert_eq!(store.load("A", Document::new()), saved);
}

#[test]
fn load_without_draft_returns_fallback() {
    let (_root, store) = file_store();
    let fallback = doc(json!({"asalData": "S"}));
    assert_eq!(store.load("missing", fallback.clone()), fallback);
}

#[test]
fn corrupt_draft_falls_back() {
    let (_root, store) = file_store();
    let path = store.draft_path("broken");
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(&path, b"{not json").expect("write");
    let fallback = doc(json!({"x": 1}));
    assert_eq!(store.load("broken", fallback.clone()), fallback);

    std::fs::write(&path, b"[1, 2]").expect("write");
    assert!(store.read("broken").is_err());
    assert_eq!(store.load("broken", fallback.clone()), fallback);
}

#[test]
fn clear_removes_draft_and_tolerates_absence() {
    let (_root, mut store) = file_store();
    store.save("A", &doc(json!({"a": 1})));
    assert!(store.draft_path("A").is_file());
    store.clear("A");
    assert!(!store.draft_path("A").exists());
    store.clear("A");
    assert!(store.read("A").expect("read").is_none());
}

#[test]
fn forms_are_isolated() {
    let (_root, mut store) = file_store();
    store.save("A", &doc(json!({"form": "A"})));
    store.save("B", &doc(json!({"form": "B"})));
    store.clear("A");
    assert_eq!(store.load("B", Document::new()), doc(json!({"form": "B"})));
    assert_eq!(store.load("A", Document::new()), Document::new());
}

#[test]
fn save_overwrites_previous_draft() {
    let (_root, mut store) = file_store();
    store.save("A", &doc(json!({"v": 1})));
    store.save("A", &doc(json!({"v": 2})));
    assert_eq!(store.load("A", Document::new()), doc(json!({"v": 2})));
}

#[test]
fn unwritable_store_does_not_fail_save() {
    let root = tempfile::tempdir().expect("temp root");
    let blocker = root.path().join("file");
    std::fs::write(&blocker, b"x").expect("write");
    let mut store = FileDraftStore::new(DataPaths::new(blocker));
    store.save("A", &doc(json!({"a": 1})));
    assert_eq!(store.load("A", Document::new()), Document::new());
}

#[test]
fn memory_store_honors_the_same_contract() {
    let mut store = MemoryDraftStore::new();
    let saved = doc(json!({"a": 1}));
    store.save("A", &saved);
    assert_eq!(store.load("A", Document::new()), saved);
    store.clear("A");
    assert_eq!(store.load("A", doc(json!({"f": 0}))), doc(json!({"f": 0})));
}
