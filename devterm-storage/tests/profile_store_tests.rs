use devterm_storage::ProfileStore;
use devterm_types::{Identity, TermEntry};
use tempfile::TempDir;

fn entry(term: &str) -> TermEntry {
    TermEntry::new(term, "", "Backend", "a definition")
}

// ── Entry datasets ───────────────────────────────────────────────

#[test]
fn load_entries_for_unknown_identity_is_empty() {
    let store = ProfileStore::open_in_memory().unwrap();
    assert!(store.load_entries("nobody@x.com").unwrap().is_empty());
}

#[test]
fn entries_round_trip_in_order() {
    let store = ProfileStore::open_in_memory().unwrap();
    let entries = vec![entry("Kubernetes"), entry("Docker"), entry("Api")];

    store.save_entries("user@x.com", &entries).unwrap();
    let loaded = store.load_entries("user@x.com").unwrap();
    assert_eq!(loaded, entries);
}

#[test]
fn save_entries_overwrites_previous_dataset() {
    let store = ProfileStore::open_in_memory().unwrap();
    store.save_entries("user@x.com", &[entry("Docker")]).unwrap();
    store.save_entries("user@x.com", &[entry("Api")]).unwrap();

    let loaded = store.load_entries("user@x.com").unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].term, "Api");
}

#[test]
fn datasets_are_scoped_per_identity() {
    let store = ProfileStore::open_in_memory().unwrap();
    store.save_entries("a@x.com", &[entry("Docker")]).unwrap();
    store.save_entries("b@x.com", &[entry("React"), entry("Vue")]).unwrap();

    assert_eq!(store.load_entries("a@x.com").unwrap().len(), 1);
    assert_eq!(store.load_entries("b@x.com").unwrap().len(), 2);
}

#[test]
fn corrupt_dataset_loads_as_empty_without_error() {
    // Scenario E: the slot holds something that is not an entry list.
    let store = ProfileStore::open_in_memory().unwrap();
    store.write_slot("devterm_data_user@x.com", "not json").unwrap();

    let loaded = store.load_entries("user@x.com").unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn wrong_shape_dataset_loads_as_empty() {
    let store = ProfileStore::open_in_memory().unwrap();
    store
        .write_slot("devterm_data_user@x.com", r#"{"term":"not a list"}"#)
        .unwrap();
    assert!(store.load_entries("user@x.com").unwrap().is_empty());
}

#[test]
fn delete_entries_removes_the_dataset() {
    let store = ProfileStore::open_in_memory().unwrap();
    store.save_entries("user@x.com", &[entry("Docker")]).unwrap();
    store.delete_entries("user@x.com").unwrap();
    assert!(store.load_entries("user@x.com").unwrap().is_empty());
}

#[test]
fn save_empty_dataset_round_trips() {
    let store = ProfileStore::open_in_memory().unwrap();
    store.save_entries("user@x.com", &[entry("Docker")]).unwrap();
    store.save_entries("user@x.com", &[]).unwrap();
    assert!(store.load_entries("user@x.com").unwrap().is_empty());
}

// ── Current identity ─────────────────────────────────────────────

#[test]
fn current_identity_round_trips() {
    let store = ProfileStore::open_in_memory().unwrap();
    let id = Identity::new("user@x.com", "user");

    store.save_current_identity(&id).unwrap();
    assert_eq!(store.load_current_identity().unwrap(), Some(id));
}

#[test]
fn current_identity_absent_by_default() {
    let store = ProfileStore::open_in_memory().unwrap();
    assert_eq!(store.load_current_identity().unwrap(), None);
}

#[test]
fn clear_current_identity_signs_out() {
    let store = ProfileStore::open_in_memory().unwrap();
    store
        .save_current_identity(&Identity::new("user@x.com", "user"))
        .unwrap();
    store.clear_current_identity().unwrap();
    assert_eq!(store.load_current_identity().unwrap(), None);
}

#[test]
fn corrupt_current_identity_loads_as_none() {
    let store = ProfileStore::open_in_memory().unwrap();
    store.write_slot("devterm_current_user", "{{{").unwrap();
    assert_eq!(store.load_current_identity().unwrap(), None);
}

// ── Generic slots / on-disk behavior ─────────────────────────────

#[test]
fn slot_read_write_delete() {
    let store = ProfileStore::open_in_memory().unwrap();
    assert_eq!(store.read_slot("k").unwrap(), None);

    store.write_slot("k", "v1").unwrap();
    assert_eq!(store.read_slot("k").unwrap(), Some("v1".to_string()));

    store.write_slot("k", "v2").unwrap();
    assert_eq!(store.read_slot("k").unwrap(), Some("v2".to_string()));

    store.delete_slot("k").unwrap();
    assert_eq!(store.read_slot("k").unwrap(), None);
}

#[test]
fn data_survives_reopen_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.db");

    {
        let store = ProfileStore::new(&path).unwrap();
        store.save_entries("user@x.com", &[entry("Docker")]).unwrap();
        store
            .save_current_identity(&Identity::new("user@x.com", "user"))
            .unwrap();
    }

    let store = ProfileStore::new(&path).unwrap();
    assert_eq!(store.load_entries("user@x.com").unwrap().len(), 1);
    assert!(store.load_current_identity().unwrap().is_some());
}
