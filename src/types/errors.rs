use thiserror::Error;

use super::tab::TabId;

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug, Error)]
pub enum TabError {
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(TabId),
}

// === BookmarkError ===

/// Errors related to bookmark management operations.
#[derive(Debug, Error)]
pub enum BookmarkError {
    /// Bookmark with the given ID was not found.
    #[error("Bookmark not found: {0}")]
    NotFound(String),
    /// A bookmark with the same URL already exists.
    #[error("Duplicate bookmark URL: {0}")]
    DuplicateUrl(String),
    /// Database operation failed.
    #[error("Bookmark database error: {0}")]
    DatabaseError(String),
}

// === HistoryError ===

/// Errors related to browsing history operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// History entry with the given ID was not found.
    #[error("History entry not found: {0}")]
    NotFound(String),
    /// Recording is switched off (private mode).
    #[error("History recording is disabled")]
    RecordingDisabled,
    /// Database operation failed.
    #[error("History database error: {0}")]
    DatabaseError(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === SiteStoreError ===

/// Errors raised while querying the site-suggestion store.
#[derive(Debug, Error)]
pub enum SiteStoreError {
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Bookmark(#[from] BookmarkError),
    /// The store's lock was poisoned by a panicking writer.
    #[error("Site store unavailable: {0}")]
    Unavailable(String),
}

// === SearchFetchError ===

/// Errors raised by remote search-suggestion lookups.
#[derive(Debug, Error)]
pub enum SearchFetchError {
    /// The autocomplete URL template could not be turned into a URL.
    #[error("Invalid autocomplete URL: {0}")]
    InvalidTemplate(String),
    /// A network error occurred while contacting the search engine.
    #[error("Search suggestion network error: {0}")]
    NetworkError(String),
    /// The engine answered with something other than OpenSearch suggestions.
    #[error("Search suggestion parse error: {0}")]
    ParseError(String),
}
