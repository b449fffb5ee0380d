use serde::{Deserialize, Serialize};

use super::site::{SiteEntry, BOOKMARK_TAG};

/// A saved bookmark with its user tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    pub tags: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Bookmark {
    /// User tags prefixed with the `bookmark` marker the ranking keys on.
    pub fn site_tags(&self) -> Vec<String> {
        std::iter::once(BOOKMARK_TAG.to_string())
            .chain(self.tags.iter().filter(|t| *t != BOOKMARK_TAG).cloned())
            .collect()
    }
}

impl From<Bookmark> for SiteEntry {
    fn from(bookmark: Bookmark) -> Self {
        let tags = bookmark.site_tags();
        SiteEntry {
            location: bookmark.url,
            title: bookmark.title,
            last_accessed_time: bookmark.updated_at,
            visit_count: 0,
            tags,
        }
    }
}
