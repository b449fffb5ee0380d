//! Unit tests for the HistoryManager public API.
//!
//! These tests exercise history recording, search, clearing, deletion, and
//! private mode through the `HistoryManagerTrait` interface, using an
//! in-memory SQLite database.

use urlbar_suggest::database::Database;
use urlbar_suggest::managers::history_manager::{HistoryManager, HistoryManagerTrait};

fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

/// Visiting the same URL multiple times should increment visit_count.
#[test]
fn test_visit_count_increments_on_repeated_visits() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());

    let url = "https://example.com";
    let id = mgr.record_visit(url, "Example").unwrap();
    let entries = mgr.list_history(None).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].visit_count, 1);

    let id2 = mgr.record_visit(url, "Example").unwrap();
    assert_eq!(id, id2, "Repeated visit should return the same entry ID");
    assert_eq!(mgr.list_history(None).unwrap()[0].visit_count, 2);

    mgr.record_visit(url, "Example").unwrap();
    assert_eq!(mgr.list_history(None).unwrap()[0].visit_count, 3);
}

#[test]
fn test_search_is_case_insensitive_over_url_and_title() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());

    mgr.record_visit("https://www.google.com/", "Google").unwrap();
    mgr.record_visit("https://docs.rs/tokio", "Tokio docs").unwrap();
    mgr.record_visit("https://example.com/", "GOOGLE mirror").unwrap();

    let hits = mgr.search_history("goog").unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|h| h.url != "https://docs.rs/tokio"));
}

#[test]
fn test_search_treats_wildcards_literally() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());

    mgr.record_visit("https://example.com/100%25", "Percent").unwrap();
    mgr.record_visit("https://example.com/a_b", "Underscore").unwrap();
    mgr.record_visit("https://example.com/axb", "Plain").unwrap();

    let hits = mgr.search_history("a_b").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Underscore");
}

#[test]
fn test_list_history_respects_limit() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());
    for i in 0..5 {
        mgr.record_visit(&format!("https://site{i}.com"), "Site").unwrap();
    }
    assert_eq!(mgr.list_history(Some(2)).unwrap().len(), 2);
    assert_eq!(mgr.list_history(None).unwrap().len(), 5);
}

/// clear_all should remove all history entries from the database.
#[test]
fn test_clear_all_empties_history() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());

    mgr.record_visit("https://example.com", "Example").unwrap();
    mgr.record_visit("https://rust-lang.org", "Rust").unwrap();
    assert_eq!(mgr.list_history(None).unwrap().len(), 2);

    mgr.clear_all().unwrap();
    assert_eq!(mgr.list_history(None).unwrap().len(), 0);
}

/// When recording is disabled (private mode), record_visit should return an error.
#[test]
fn test_recording_disabled_in_private_mode() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());

    assert!(mgr.is_recording_enabled());
    mgr.set_recording_enabled(false);

    let result = mgr.record_visit("https://example.com", "Example");
    assert!(result.is_err(), "record_visit should fail when recording is disabled");
    assert_eq!(mgr.list_history(None).unwrap().len(), 0);

    mgr.set_recording_enabled(true);
    mgr.record_visit("https://example.com", "Example").unwrap();
    assert_eq!(mgr.list_history(None).unwrap().len(), 1);
}

#[test]
fn test_delete_entry_removes_single_entry() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());

    let id1 = mgr.record_visit("https://example.com", "Example").unwrap();
    mgr.record_visit("https://rust-lang.org", "Rust").unwrap();

    mgr.delete_entry(&id1).unwrap();

    let remaining = mgr.list_history(None).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].url, "https://rust-lang.org");
    assert!(mgr.delete_entry(&id1).is_err(), "Deleting twice should report NotFound");
}
