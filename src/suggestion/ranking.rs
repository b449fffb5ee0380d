//! Generic ranking of site-like candidates and synthesis of virtual
//! history entries.

use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;

use url::Url;

use super::normalize::{normalize_location, should_normalize_location};
use crate::types::site::{SiteEntry, TopSiteEntry};
use crate::types::tab::{Tab, TabId};

/// Anything that can become a URL-bar suggestion.
pub trait SuggestionCandidate {
    fn location(&self) -> &str;

    fn title(&self) -> &str {
        self.location()
    }

    fn visit_count(&self) -> u32 {
        0
    }

    fn last_accessed_time(&self) -> i64 {
        0
    }

    fn tab_id(&self) -> Option<TabId> {
        None
    }
}

impl SuggestionCandidate for SiteEntry {
    fn location(&self) -> &str {
        &self.location
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn visit_count(&self) -> u32 {
        self.visit_count
    }

    fn last_accessed_time(&self) -> i64 {
        self.last_accessed_time
    }
}

impl SuggestionCandidate for Tab {
    fn location(&self) -> &str {
        &self.url
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn last_accessed_time(&self) -> i64 {
        self.created_at
    }

    fn tab_id(&self) -> Option<TabId> {
        Some(self.id)
    }
}

impl SuggestionCandidate for TopSiteEntry {
    fn location(&self) -> &str {
        &self.location
    }
}

impl SuggestionCandidate for String {
    fn location(&self) -> &str {
        self
    }
}

/// Strips what the user did not type explicitly from `input`.
fn comparable_input(user_input: &str) -> String {
    let lower = user_input.to_lowercase();
    if should_normalize_location(&lower) {
        normalize_location(&lower)
    } else {
        lower
    }
}

/// Orders history, bookmark and tab candidates against the user's input.
///
/// A location that starts with the input (after stripping scheme and `www.`
/// unless the user is typing those) wins, and among such matches the shorter
/// location wins. Everything else is ordered by visit count, then recency.
pub fn suggestion_comparator<T: SuggestionCandidate>(
    user_input: &str,
) -> impl Fn(&T, &T) -> Ordering {
    let normalize = should_normalize_location(&user_input.to_lowercase());
    let input = comparable_input(user_input);
    move |a, b| {
        let key = |c: &T| {
            let lower = c.location().to_lowercase();
            let location = if normalize {
                normalize_location(&lower)
            } else {
                lower
            };
            let prefix = location.starts_with(&input);
            (
                !prefix,
                if prefix { location.len() } else { 0 },
                Reverse(c.visit_count()),
                Reverse(c.last_accessed_time()),
            )
        };
        key(a).cmp(&key(b))
    }
}

/// Synthesizes origin-root entries (`scheme://host/`) for every http(s)
/// origin that appears at least twice in `results`.
///
/// Roots already present in `results`, or not containing the input, are
/// skipped. A virtual entry sums the group's visits and takes its most
/// recent access time.
pub fn create_virtual_history_items(results: &[SiteEntry], user_input: &str) -> Vec<SiteEntry> {
    let mut order: Vec<(String, String)> = Vec::new();
    let mut groups: HashMap<String, Vec<&SiteEntry>> = HashMap::new();

    for entry in results {
        let Ok(url) = Url::parse(&entry.location) else {
            continue;
        };
        if !matches!(url.scheme(), "http" | "https") {
            continue;
        }
        let Some(host) = url.host_str() else {
            continue;
        };
        let origin = url.origin().ascii_serialization();
        let group = groups.entry(origin.clone()).or_default();
        if group.is_empty() {
            order.push((origin, host.to_string()));
        }
        group.push(entry);
    }

    let input = comparable_input(user_input);
    order
        .into_iter()
        .filter_map(|(origin, host)| {
            let group = groups.get(&origin)?;
            if group.len() < 2 {
                return None;
            }
            let root = format!("{}/", origin);
            let already_present = results
                .iter()
                .any(|e| e.location == root || e.location == origin);
            if already_present || !normalize_location(&root).contains(&input) {
                return None;
            }
            Some(SiteEntry {
                location: root,
                title: host,
                last_accessed_time: group.iter().map(|e| e.last_accessed_time).max().unwrap_or(0),
                visit_count: group.iter().map(|e| e.visit_count).sum(),
                tags: Vec::new(),
            })
        })
        .collect()
}
