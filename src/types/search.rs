use serde::{Deserialize, Serialize};

/// Placeholder substituted with the user's query in engine URL templates.
pub const SEARCH_TERMS_PLACEHOLDER: &str = "{searchTerms}";

/// Description of a search engine as used by the URL bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDetail {
    pub name: String,
    pub search_url: String,
    pub autocomplete_url: Option<String>,
    pub shortcut: Option<String>,
}

impl SearchDetail {
    fn builtin(name: &str, search_url: &str, autocomplete_url: Option<&str>, shortcut: &str) -> Self {
        Self {
            name: name.to_string(),
            search_url: search_url.to_string(),
            autocomplete_url: autocomplete_url.map(str::to_string),
            shortcut: Some(shortcut.to_string()),
        }
    }
}

/// Built-in search engines.
pub fn builtin_search_engines() -> Vec<SearchDetail> {
    vec![
        SearchDetail::builtin(
            "google",
            "https://www.google.com/search?q={searchTerms}",
            Some("https://suggestqueries.google.com/complete/search?client=chrome&q={searchTerms}"),
            ":g",
        ),
        SearchDetail::builtin(
            "duckduckgo",
            "https://duckduckgo.com/?q={searchTerms}",
            Some("https://ac.duckduckgo.com/ac/?q={searchTerms}&type=list"),
            ":d",
        ),
        SearchDetail::builtin(
            "bing",
            "https://www.bing.com/search?q={searchTerms}",
            Some("https://api.bing.com/osjson.aspx?query={searchTerms}"),
            ":b",
        ),
        SearchDetail::builtin(
            "wikipedia",
            "https://en.wikipedia.org/wiki/Special:Search?search={searchTerms}",
            Some("https://en.wikipedia.org/w/api.php?action=opensearch&search={searchTerms}"),
            ":w",
        ),
        SearchDetail::builtin(
            "github",
            "https://github.com/search?q={searchTerms}",
            None,
            ":gh",
        ),
    ]
}

/// Looks up a built-in engine by name (case-insensitive).
pub fn find_search_engine(name: &str) -> Option<SearchDetail> {
    builtin_search_engines()
        .into_iter()
        .find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Remote suggestions last published for a tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub tab_id: Option<super::tab::TabId>,
    pub query: Option<String>,
    pub suggestions: Vec<String>,
}
