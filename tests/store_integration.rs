//! Integration tests for durable persistence
//!
//! Exercises FileStorage through a real directory: restart survival,
//! blob layout, recovery from corruption.

use pretty_assertions::assert_eq;

use tapvote::core::store::{FeedbackStore, FileStorage};
use tapvote::types::{AgeBracket, FeedbackRecord};
use tapvote::STORAGE_KEY;

#[test]
fn test_append_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = FeedbackStore::new(FileStorage::new(dir.path()));
        store
            .append(FeedbackRecord::new(5, AgeBracket::From20To24))
            .unwrap();
        store
            .append(FeedbackRecord::new(2, AgeBracket::Over60))
            .unwrap();
    }

    // A fresh store over the same directory observes both records
    let store = FeedbackStore::new(FileStorage::new(dir.path()));
    let records = store.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].rating, 2);
    assert_eq!(records[1].rating, 5);
}

#[test]
fn test_persisted_blob_is_plain_json_array() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = FeedbackStore::new(FileStorage::new(dir.path()));
    store
        .append(FeedbackRecord::new(4, AgeBracket::From15To19))
        .unwrap();

    let blob =
        std::fs::read_to_string(dir.path().join(format!("{}.json", STORAGE_KEY))).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let entries = parsed.as_array().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["rating"], 4);
    assert_eq!(entries[0]["age"], "15-19");
    assert!(entries[0]["createdAt"].is_string());
}

#[test]
fn test_corrupt_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{}.json", STORAGE_KEY)), "not json").unwrap();

    let store = FeedbackStore::new(FileStorage::new(dir.path()));
    assert!(store.is_empty());
    assert!(store.load_all().is_empty());
}

#[test]
fn test_append_recovers_after_corruption() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("{}.json", STORAGE_KEY));
    std::fs::write(&path, "{{{{").unwrap();

    let mut store = FeedbackStore::new(FileStorage::new(dir.path()));
    store
        .append(FeedbackRecord::new(3, AgeBracket::From25To39))
        .unwrap();

    // The rewrite replaced the corrupt blob entirely
    let reloaded = store.load_all();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].rating, 3);
}

#[test]
fn test_load_all_idempotent_without_append() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FeedbackStore::new(FileStorage::new(dir.path()));
    store
        .append(FeedbackRecord::new(5, AgeBracket::Under15))
        .unwrap();

    let first = store.load_all();
    let second = store.load_all();
    assert_eq!(first, second);
}

#[test]
fn test_legacy_entries_with_unknown_bracket_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let blob = r#"[
        {"rating": 5, "age": "20-24", "createdAt": "2024-05-01T10:00:00Z"},
        {"rating": 4, "age": "unknown", "createdAt": "2024-05-01T10:01:00Z"}
    ]"#;
    std::fs::write(dir.path().join(format!("{}.json", STORAGE_KEY)), blob).unwrap();

    let store = FeedbackStore::new(FileStorage::new(dir.path()));
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0].age, AgeBracket::From20To24);
}

#[test]
fn test_missing_directory_reads_empty_and_creates_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("not-yet-created");

    let mut store = FeedbackStore::new(FileStorage::new(&nested));
    assert!(store.is_empty());

    store
        .append(FeedbackRecord::new(2, AgeBracket::From40To59))
        .unwrap();
    assert!(nested.join(format!("{}.json", STORAGE_KEY)).exists());
}
