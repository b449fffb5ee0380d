use serde::{Deserialize, Serialize};

/// Tag carried by site entries that come from the bookmark store.
pub const BOOKMARK_TAG: &str = "bookmark";

/// A history or bookmark record as seen by the suggestion engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteEntry {
    pub location: String,
    pub title: String,
    pub last_accessed_time: i64,
    pub visit_count: u32,
    pub tags: Vec<String>,
}

impl SiteEntry {
    pub fn is_bookmark(&self) -> bool {
        self.tags.iter().any(|t| t == BOOKMARK_TAG)
    }
}

/// Which parts of the site store a query may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteQueryOptions {
    pub history_suggestions_on: bool,
    pub bookmark_suggestions_on: bool,
}

/// Static popularity entry used for top-site suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSiteEntry {
    pub location: String,
    pub rank: u32,
}
