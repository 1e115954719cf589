use std::fs;
use tempfile::TempDir;
use todozapp::model::Filter;
use todozapp::store::backend::StorageBackend;
use todozapp::store::fs_backend::FsBackend;
use todozapp::store::TodoStore;
use todozapp::view::project;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_slot_io() {
    let (_dir, backend) = setup();

    // 1. Missing slot reads as None
    assert_eq!(backend.read_slot().unwrap(), None);

    // 2. Write
    backend.write_slot("[]").unwrap();

    // 3. Read back
    assert_eq!(backend.read_slot().unwrap(), Some("[]".to_string()));
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.write_slot("[1]").unwrap();
    backend.write_slot("[2]").unwrap();

    // Verify file exists with the latest payload
    let expected_path = dir.path().join("todos.json");
    assert!(expected_path.exists());
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "[2]");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_custom_data_file() {
    let (dir, backend) = setup();
    let backend = backend.with_data_file("errands.json");

    backend.write_slot("[]").unwrap();

    assert!(dir.path().join("errands.json").exists());
    assert!(!dir.path().join("todos.json").exists());
    assert_eq!(backend.slot_path(), dir.path().join("errands.json"));
}

#[test]
fn test_fs_backend_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("data").join("todoz");
    let backend = FsBackend::new(nested.clone());

    backend.write_slot("[]").unwrap();

    assert!(nested.join("todos.json").exists());
}

// --- On-Disk Store Round-Trip Tests ---

#[test]
fn test_store_round_trip_on_disk() {
    let dir = TempDir::new().unwrap();

    let mut store = TodoStore::load(FsBackend::new(dir.path().to_path_buf()));
    let _ = store.add("Buy milk", "");
    let _ = store.add("Walk dog", "bring leash\nand bag");
    let milk_id = store.items()[1].id;
    let _ = store.toggle(milk_id, true);
    let saved = store.items().to_vec();

    // Fresh backend over the same directory, as a new process would see it
    let reloaded = TodoStore::load(FsBackend::new(dir.path().to_path_buf()));

    assert_eq!(reloaded.items(), saved.as_slice());

    let projection = project(reloaded.items(), Filter::All);
    assert_eq!(projection.remaining_count, 1);
    assert!(projection.has_any_completed);
}

#[test]
fn test_store_loads_empty_from_missing_slot() {
    let dir = TempDir::new().unwrap();

    let store = TodoStore::load(FsBackend::new(dir.path().to_path_buf()));
    assert!(store.items().is_empty());
}

#[test]
fn test_store_loads_empty_from_corrupt_slot() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("todos.json"), "{{ definitely not json").unwrap();

    let store = TodoStore::load(FsBackend::new(dir.path().to_path_buf()));
    assert!(store.items().is_empty());
}

#[test]
fn test_store_recovers_by_overwriting_corrupt_slot() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("todos.json"), "[not, valid]").unwrap();

    let mut store = TodoStore::load(FsBackend::new(dir.path().to_path_buf()));
    let mutation = store.add("Fresh start", "");
    assert!(mutation.persist_error.is_none());

    let reloaded = TodoStore::load(FsBackend::new(dir.path().to_path_buf()));
    assert_eq!(reloaded.items().len(), 1);
    assert_eq!(reloaded.items()[0].text, "Fresh start");
}

#[test]
fn test_persisted_layout_fields() {
    let dir = TempDir::new().unwrap();

    let mut store = TodoStore::load(FsBackend::new(dir.path().to_path_buf()));
    let _ = store.add("Buy milk", "2%");

    let raw = fs::read_to_string(dir.path().join("todos.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let records = value.as_array().expect("slot should hold an array");
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert!(record["id"].is_string());
    assert_eq!(record["text"], "Buy milk");
    assert_eq!(record["detail"], "2%");
    assert_eq!(record["completed"], false);
}
