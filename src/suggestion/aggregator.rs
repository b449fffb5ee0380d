//! Debounced fan-out/fan-in over the five suggestion sources.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::debounce::Debouncer;
use super::events::{SuggestionSink, UrlBarEvent};
use super::sources::{
    about_suggestions, history_suggestions, opened_tab_suggestions, search_suggestions,
    top_site_suggestions, SuggestionContext,
};
use super::top_sites::TopSites;
use crate::services::site_store::SiteSuggestionStore;
use crate::types::suggestion::{Suggestion, SuggestionList, SuggestionType, SuggestionsByType};
use crate::types::tab::{TabId, WindowId};

/// Trailing-edge delay for suggestion generation.
pub const DEFAULT_SUGGESTIONS_DEBOUNCE: Duration = Duration::from_millis(5);

struct EngineInner {
    site_store: Arc<dyn SiteSuggestionStore>,
    top_sites: Arc<TopSites>,
    sink: Arc<dyn SuggestionSink>,
    debouncer: Debouncer,
}

/// Produces the merged URL-bar suggestion list for each keystroke.
///
/// Cheap to clone; clones share the debounce lane, so a call on any clone
/// supersedes pending calls on the others.
#[derive(Clone)]
pub struct SuggestionEngine {
    inner: Arc<EngineInner>,
}

impl SuggestionEngine {
    pub fn new(
        site_store: Arc<dyn SiteSuggestionStore>,
        top_sites: Arc<TopSites>,
        sink: Arc<dyn SuggestionSink>,
    ) -> Self {
        Self::with_debounce(site_store, top_sites, sink, DEFAULT_SUGGESTIONS_DEBOUNCE)
    }

    pub fn with_debounce(
        site_store: Arc<dyn SiteSuggestionStore>,
        top_sites: Arc<TopSites>,
        sink: Arc<dyn SuggestionSink>,
        delay: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                site_store,
                top_sites,
                sink,
                debouncer: Debouncer::new(delay),
            }),
        }
    }

    pub fn debounce(&self) -> Duration {
        self.inner.debouncer.delay()
    }

    pub fn set_debounce(&self, delay: Duration) {
        self.inner.debouncer.set_delay(delay);
    }

    /// Debounced entry point: after the delay, runs every source against
    /// `url_location` and dispatches one `SuggestionsChanged` event, unless
    /// a newer call arrived in the meantime.
    ///
    /// An empty location dispatches nothing, but still supersedes any
    /// pending call.
    pub fn generate_new_suggestions_list(
        &self,
        ctx: SuggestionContext,
        window_id: WindowId,
        tab_id: TabId,
        url_location: &str,
    ) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        let url_location = url_location.to_string();

        self.inner.debouncer.call((), move |generation| async move {
            if url_location.is_empty() {
                return;
            }
            let suggestions = collect(&inner, &ctx, window_id, &url_location).await;
            if !generation.is_current() {
                tracing::debug!(window_id, tab_id, "dropping stale suggestion list");
                return;
            }
            tracing::trace!(window_id, count = suggestions.len(), "suggestions changed");
            inner.sink.dispatch(UrlBarEvent::SuggestionsChanged {
                window_id,
                suggestions,
            });
        })
    }

    /// Runs all sources once without debouncing or dispatching.
    pub async fn suggest(
        &self,
        ctx: &SuggestionContext,
        window_id: WindowId,
        url_location: &str,
    ) -> SuggestionList {
        if url_location.is_empty() {
            return Vec::new();
        }
        collect(&self.inner, ctx, window_id, url_location).await
    }
}

/// Joins all five sources and concatenates them in priority order.
async fn collect(
    inner: &EngineInner,
    ctx: &SuggestionContext,
    window_id: WindowId,
    url_location: &str,
) -> SuggestionList {
    let input = url_location.to_lowercase();
    let (history, about, tabs, search, top_sites) = tokio::join!(
        history_suggestions(inner.site_store.as_ref(), ctx, &input),
        about_suggestions(ctx, &input),
        opened_tab_suggestions(ctx, window_id, &input),
        search_suggestions(ctx, &input),
        top_site_suggestions(&inner.top_sites, ctx, &input),
    );

    [history, about, tabs, search, top_sites]
        .into_iter()
        .flatten()
        .collect()
}

/// Splits a merged list back into per-type groups, preserving order.
pub fn filter_suggestion_list_by_type(suggestions: &[Suggestion]) -> SuggestionsByType {
    let mut grouped = SuggestionsByType::default();
    for suggestion in suggestions {
        let bucket = match suggestion.suggestion_type {
            SuggestionType::Bookmark => &mut grouped.bookmark_suggestions,
            SuggestionType::History => &mut grouped.history_suggestions,
            SuggestionType::AboutPages => &mut grouped.about_pages_suggestions,
            SuggestionType::Tab => &mut grouped.tab_suggestions,
            SuggestionType::Search => &mut grouped.search_suggestions,
            SuggestionType::TopSite => &mut grouped.top_site_suggestions,
        };
        bucket.push(suggestion.clone());
    }
    grouped
}
