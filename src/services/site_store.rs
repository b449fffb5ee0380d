//! Site suggestion store.
//!
//! Merges history and bookmark matches into [`SiteEntry`] records for the
//! history/bookmark suggestion adapter. SQLite access is synchronous, so the
//! query runs on the blocking pool.

use async_trait::async_trait;

use crate::database::SharedDatabase;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::types::errors::SiteStoreError;
use crate::types::site::{SiteEntry, SiteQueryOptions};

/// Read-only query interface used by the suggestion engine.
#[async_trait]
pub trait SiteSuggestionStore: Send + Sync {
    async fn query(
        &self,
        input: &str,
        options: SiteQueryOptions,
    ) -> Result<Vec<SiteEntry>, SiteStoreError>;
}

/// Store backed by the browser's SQLite database.
#[derive(Clone)]
pub struct SqliteSiteStore {
    db: SharedDatabase,
}

impl SqliteSiteStore {
    pub fn new(db: SharedDatabase) -> Self {
        Self { db }
    }

    fn query_blocking(
        db: &SharedDatabase,
        input: &str,
        options: SiteQueryOptions,
    ) -> Result<Vec<SiteEntry>, SiteStoreError> {
        let db = db
            .lock()
            .map_err(|_| SiteStoreError::Unavailable("database lock poisoned".into()))?;
        let conn = db.connection();
        let mut entries: Vec<SiteEntry> = Vec::new();

        if options.history_suggestions_on {
            entries.extend(
                HistoryManager::new(conn)
                    .search_history(input)?
                    .into_iter()
                    .map(SiteEntry::from),
            );
        }

        if options.bookmark_suggestions_on {
            for bookmark in BookmarkManager::new(conn).search_bookmarks(input)? {
                match entries.iter_mut().find(|e| e.location == bookmark.url) {
                    Some(existing) => {
                        existing.tags = bookmark.site_tags();
                        if existing.title.is_empty() {
                            existing.title = bookmark.title;
                        }
                    }
                    None => entries.push(bookmark.into()),
                }
            }
        }

        Ok(entries)
    }
}

#[async_trait]
impl SiteSuggestionStore for SqliteSiteStore {
    async fn query(
        &self,
        input: &str,
        options: SiteQueryOptions,
    ) -> Result<Vec<SiteEntry>, SiteStoreError> {
        if !options.history_suggestions_on && !options.bookmark_suggestions_on {
            return Ok(Vec::new());
        }

        let db = self.db.clone();
        let input = input.to_string();
        tokio::task::spawn_blocking(move || Self::query_blocking(&db, &input, options))
            .await
            .map_err(|e| SiteStoreError::Unavailable(e.to_string()))?
    }
}
