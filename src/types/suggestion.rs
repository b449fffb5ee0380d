use serde::{Deserialize, Serialize};

use super::tab::TabId;

/// Source a URL-bar suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionType {
    History,
    Bookmark,
    AboutPages,
    Tab,
    Search,
    TopSite,
}

/// A single ranked candidate shown in the URL bar.
///
/// Built fresh for every aggregation and never mutated afterwards; the
/// order of a group is fixed by the comparator that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub location: String,
    pub title: String,
    pub sort_order: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<TabId>,
}

/// Ordered list of suggestions; insertion order is ranking order.
pub type SuggestionList = Vec<Suggestion>;

/// A merged suggestion list split back into its typed groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsByType {
    pub bookmark_suggestions: Vec<Suggestion>,
    pub history_suggestions: Vec<Suggestion>,
    pub about_pages_suggestions: Vec<Suggestion>,
    pub tab_suggestions: Vec<Suggestion>,
    pub search_suggestions: Vec<Suggestion>,
    pub top_site_suggestions: Vec<Suggestion>,
}
