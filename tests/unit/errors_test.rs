use urlbar_suggest::types::errors::*;

// === TabError Tests ===

#[test]
fn tab_error_not_found_display() {
    let err = TabError::NotFound(42);
    assert_eq!(err.to_string(), "Tab not found: 42");
}

#[test]
fn tab_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(TabError::NotFound(1));
    assert!(err.source().is_none());
}

// === BookmarkError Tests ===

#[test]
fn bookmark_error_display_variants() {
    assert_eq!(
        BookmarkError::NotFound("bm-1".to_string()).to_string(),
        "Bookmark not found: bm-1"
    );
    assert_eq!(
        BookmarkError::DuplicateUrl("https://example.com".to_string()).to_string(),
        "Duplicate bookmark URL: https://example.com"
    );
    assert_eq!(
        BookmarkError::DatabaseError("locked".to_string()).to_string(),
        "Bookmark database error: locked"
    );
}

// === HistoryError Tests ===

#[test]
fn history_error_display_variants() {
    assert_eq!(
        HistoryError::NotFound("h-1".to_string()).to_string(),
        "History entry not found: h-1"
    );
    assert_eq!(
        HistoryError::RecordingDisabled.to_string(),
        "History recording is disabled"
    );
    assert_eq!(
        HistoryError::DatabaseError("disk full".to_string()).to_string(),
        "History database error: disk full"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("denied".to_string()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::SerializationError("eof".to_string()).to_string(),
        "Settings serialization error: eof"
    );
    assert_eq!(
        SettingsError::InvalidKey("x.y".to_string()).to_string(),
        "Invalid settings key: x.y"
    );
    assert_eq!(
        SettingsError::InvalidValue("nope".to_string()).to_string(),
        "Invalid settings value: nope"
    );
}

// === SiteStoreError Tests ===

#[test]
fn site_store_error_is_transparent_over_sources() {
    let err: SiteStoreError = HistoryError::DatabaseError("boom".to_string()).into();
    assert_eq!(err.to_string(), "History database error: boom");

    let err: SiteStoreError = BookmarkError::NotFound("b".to_string()).into();
    assert_eq!(err.to_string(), "Bookmark not found: b");

    assert_eq!(
        SiteStoreError::Unavailable("poisoned".to_string()).to_string(),
        "Site store unavailable: poisoned"
    );
}

// === SearchFetchError Tests ===

#[test]
fn search_fetch_error_display_variants() {
    assert_eq!(
        SearchFetchError::InvalidTemplate("ftp://x".to_string()).to_string(),
        "Invalid autocomplete URL: ftp://x"
    );
    assert_eq!(
        SearchFetchError::NetworkError("timeout".to_string()).to_string(),
        "Search suggestion network error: timeout"
    );
    assert_eq!(
        SearchFetchError::ParseError("not an array".to_string()).to_string(),
        "Search suggestion parse error: not an array"
    );
}

#[test]
fn errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TabError>();
    assert_send_sync::<BookmarkError>();
    assert_send_sync::<HistoryError>();
    assert_send_sync::<SettingsError>();
    assert_send_sync::<SiteStoreError>();
    assert_send_sync::<SearchFetchError>();
}
