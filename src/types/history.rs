use serde::{Deserialize, Serialize};

use super::site::SiteEntry;

/// One row of the `history` table. Repeat visits fold into the same row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub url: String,
    pub title: String,
    /// Unix seconds of the most recent visit.
    pub visit_time: i64,
    pub visit_count: u32,
}

impl From<HistoryEntry> for SiteEntry {
    fn from(visit: HistoryEntry) -> Self {
        SiteEntry {
            location: visit.url,
            title: visit.title,
            last_accessed_time: visit.visit_time,
            visit_count: visit.visit_count,
            tags: Vec::new(),
        }
    }
}
