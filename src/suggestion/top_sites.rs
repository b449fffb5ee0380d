//! Precomputed popularity list used by the top-site adapter and the
//! domain comparator.

use std::collections::HashMap;

use crate::types::site::TopSiteEntry;

const BUILTIN_TOP_SITES: &[&str] = &[
    "google.com",
    "youtube.com",
    "facebook.com",
    "baidu.com",
    "wikipedia.org",
    "yahoo.com",
    "reddit.com",
    "amazon.com",
    "twitter.com",
    "instagram.com",
    "linkedin.com",
    "netflix.com",
    "bing.com",
    "live.com",
    "github.com",
    "stackoverflow.com",
    "ebay.com",
    "microsoft.com",
    "apple.com",
    "twitch.tv",
    "imgur.com",
    "wordpress.com",
    "paypal.com",
    "duckduckgo.com",
    "mozilla.org",
];

/// Ordered `{location, rank}` list with O(1) rank lookup by host.
#[derive(Debug, Clone, Default)]
pub struct TopSites {
    entries: Vec<TopSiteEntry>,
    ranks: HashMap<String, u32>,
}

impl TopSites {
    pub fn new(mut entries: Vec<TopSiteEntry>) -> Self {
        entries.sort_by_key(|e| e.rank);
        let mut ranks = HashMap::with_capacity(entries.len());
        for entry in &entries {
            ranks
                .entry(strip_www(&entry.location).to_lowercase())
                .or_insert(entry.rank);
        }
        Self { entries, ranks }
    }

    /// The bundled list, ranked from 1.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_TOP_SITES
                .iter()
                .zip(1..)
                .map(|(location, rank)| TopSiteEntry {
                    location: location.to_string(),
                    rank,
                })
                .collect(),
        )
    }

    /// Parses a JSON array of `{"location": ..., "rank": ...}` objects.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<TopSiteEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[TopSiteEntry] {
        &self.entries
    }

    pub fn locations(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.location.clone()).collect()
    }

    /// Popularity rank of `host`, ignoring a leading `www.`.
    pub fn rank_of(&self, host: &str) -> Option<u32> {
        self.ranks.get(&strip_www(host).to_lowercase()).copied()
    }
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}
