//! The five suggestion sources.
//!
//! Every adapter resolves to a capped, typed, sorted list and never fails:
//! a broken collaborator yields an empty list so the other sources still
//! reach the URL bar.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::about_pages::navigable_about_pages;
use super::comparators::{domain_comparator, search_suggestion_comparator};
use super::ranking::{create_virtual_history_items, suggestion_comparator, SuggestionCandidate};
use super::top_sites::TopSites;
use super::url_util::is_internal_url;
use crate::services::site_store::SiteSuggestionStore;
use crate::types::search::SearchResults;
use crate::types::settings::{BrowserSettings, SettingKey};
use crate::types::site::{SiteEntry, SiteQueryOptions};
use crate::types::suggestion::{Suggestion, SuggestionList, SuggestionType};
use crate::types::tab::{Tab, WindowId};

/// Read-only snapshot of browser state handed to each adapter.
#[derive(Debug, Clone, Default)]
pub struct SuggestionContext {
    pub settings: BrowserSettings,
    pub tabs: Vec<Tab>,
    pub search_results: SearchResults,
}

impl SuggestionContext {
    pub fn get_setting(&self, key: SettingKey) -> bool {
        self.settings.get_setting(key)
    }

    pub fn tabs_by_window_id(&self, window_id: WindowId) -> Vec<Tab> {
        self.tabs
            .iter()
            .filter(|t| t.window_id == window_id)
            .cloned()
            .collect()
    }
}

/// Which candidates survive into the suggestion list.
pub enum ElementFilter<'a, T> {
    /// Lowercased location contains the lowercased input.
    LocationContainsInput,
    /// Keep everything; the producer already filtered.
    All,
    Custom(&'a dyn Fn(&T) -> bool),
}

pub struct ElementMapping<'a, T> {
    pub max_results: usize,
    pub suggestion_type: &'a dyn Fn(&T) -> SuggestionType,
    pub filter: ElementFilter<'a, T>,
    pub sort: Option<&'a dyn Fn(&T, &T) -> Ordering>,
}

/// Turns raw candidates into suggestions.
///
/// Duplicate locations (case-insensitive) keep their first occurrence,
/// except for tabs, where two tabs on the same page are both useful.
/// The survivors are filtered, stably sorted and capped.
pub fn map_list_to_elements<T: SuggestionCandidate>(
    data: Vec<T>,
    user_input_lower: &str,
    mapping: ElementMapping<'_, T>,
) -> SuggestionList {
    let mut seen = HashSet::new();
    let mut items: Vec<T> = data
        .into_iter()
        .filter(|item| {
            !item.location().is_empty()
                && (item.tab_id().is_some() || seen.insert(item.location().to_lowercase()))
        })
        .filter(|item| match &mapping.filter {
            ElementFilter::LocationContainsInput => {
                item.location().to_lowercase().contains(user_input_lower)
            }
            ElementFilter::All => true,
            ElementFilter::Custom(keep) => keep(item),
        })
        .collect();

    if let Some(sort) = mapping.sort {
        items.sort_by(|a, b| sort(a, b));
    }

    items
        .iter()
        .take(mapping.max_results)
        .enumerate()
        .map(|(index, item)| Suggestion {
            suggestion_type: (mapping.suggestion_type)(item),
            location: item.location().to_string(),
            title: item.title().to_string(),
            sort_order: Some(index),
            tab_id: item.tab_id(),
        })
        .collect()
}

/// History and bookmark matches plus synthesized origin roots.
pub async fn history_suggestions(
    store: &dyn SiteSuggestionStore,
    ctx: &SuggestionContext,
    user_input_lower: &str,
) -> SuggestionList {
    let options = SiteQueryOptions {
        history_suggestions_on: ctx.get_setting(SettingKey::HistorySuggestions),
        bookmark_suggestions_on: ctx.get_setting(SettingKey::BookmarkSuggestions),
    };
    if !options.history_suggestions_on && !options.bookmark_suggestions_on {
        return Vec::new();
    }

    let mut results = match store.query(user_input_lower, options).await {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!(error = %e, "site store query failed, skipping history suggestions");
            return Vec::new();
        }
    };
    let virtual_items = create_virtual_history_items(&results, user_input_lower);
    results.extend(virtual_items);

    let sort = suggestion_comparator::<SiteEntry>(user_input_lower);
    let kind = |entry: &SiteEntry| {
        if entry.is_bookmark() || !options.history_suggestions_on {
            SuggestionType::Bookmark
        } else {
            SuggestionType::History
        }
    };
    map_list_to_elements(
        results,
        user_input_lower,
        ElementMapping {
            max_results: ctx.settings.limits.max_history_sites,
            suggestion_type: &kind,
            filter: ElementFilter::All,
            sort: Some(&sort),
        },
    )
}

pub async fn about_suggestions(ctx: &SuggestionContext, user_input_lower: &str) -> SuggestionList {
    map_list_to_elements(
        navigable_about_pages(),
        user_input_lower,
        ElementMapping {
            max_results: ctx.settings.limits.max_about_pages,
            suggestion_type: &|_| SuggestionType::AboutPages,
            filter: ElementFilter::LocationContainsInput,
            sort: None,
        },
    )
}

/// Inactive, non-internal tabs of `window_id` whose title or URL matches.
pub async fn opened_tab_suggestions(
    ctx: &SuggestionContext,
    window_id: WindowId,
    user_input_lower: &str,
) -> SuggestionList {
    if !ctx.get_setting(SettingKey::OpenedTabSuggestions) {
        return Vec::new();
    }

    let keep = |tab: &Tab| {
        !is_internal_url(&tab.url)
            && !tab.active
            && (tab.title.to_lowercase().contains(user_input_lower)
                || tab.url.to_lowercase().contains(user_input_lower))
    };
    let sort = suggestion_comparator::<Tab>(user_input_lower);
    map_list_to_elements(
        ctx.tabs_by_window_id(window_id),
        user_input_lower,
        ElementMapping {
            max_results: ctx.settings.limits.max_opened_frames,
            suggestion_type: &|_| SuggestionType::Tab,
            filter: ElementFilter::Custom(&keep),
            sort: Some(&sort),
        },
    )
}

/// Remote suggestions published by the search fetcher on an earlier pass.
pub async fn search_suggestions(ctx: &SuggestionContext, user_input_lower: &str) -> SuggestionList {
    if !ctx.get_setting(SettingKey::OfferSearchSuggestions) {
        return Vec::new();
    }

    let cmp = search_suggestion_comparator(user_input_lower);
    let sort = |a: &String, b: &String| cmp(a, b);
    map_list_to_elements(
        ctx.search_results.suggestions.clone(),
        user_input_lower,
        ElementMapping {
            max_results: ctx.settings.limits.max_search,
            suggestion_type: &|_| SuggestionType::Search,
            filter: ElementFilter::LocationContainsInput,
            sort: Some(&sort),
        },
    )
}

pub async fn top_site_suggestions(
    top_sites: &TopSites,
    ctx: &SuggestionContext,
    user_input_lower: &str,
) -> SuggestionList {
    if !ctx.get_setting(SettingKey::TopsiteSuggestions) {
        return Vec::new();
    }

    let cmp = domain_comparator(user_input_lower, |host| top_sites.rank_of(host));
    let sort = |a: &String, b: &String| cmp(a, b);
    map_list_to_elements(
        top_sites.locations(),
        user_input_lower,
        ElementMapping {
            max_results: ctx.settings.limits.max_top_sites,
            suggestion_type: &|_| SuggestionType::TopSite,
            filter: ElementFilter::LocationContainsInput,
            sort: Some(&sort),
        },
    )
}
