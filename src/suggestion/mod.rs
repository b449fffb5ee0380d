//! URL-bar suggestion engine.
//!
//! Leaf helpers (normalization, comparators, ranking) feed five source
//! adapters; the aggregator merges them per keystroke and a separate lane
//! fetches remote search suggestions.

pub mod about_pages;
pub mod aggregator;
pub mod comparators;
pub mod debounce;
pub mod events;
pub mod normalize;
pub mod ranking;
pub mod search_fetcher;
pub mod sources;
pub mod top_sites;
pub mod url_util;

pub use aggregator::{filter_suggestion_list_by_type, SuggestionEngine};
pub use events::{SuggestionSink, UrlBarEvent};
pub use search_fetcher::{SearchContext, SearchResultsState, SearchSuggestionFetcher};
pub use sources::SuggestionContext;
