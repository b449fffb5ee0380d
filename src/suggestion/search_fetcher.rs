//! Debounced remote search-suggestion lane.
//!
//! Results are published into [`SearchResultsState`] and read by the search
//! adapter on the next aggregation pass. The two lanes are not joined, so
//! remote suggestions typically show up one keystroke late.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::debounce::{Debouncer, Generation};
use super::events::{SuggestionSink, UrlBarEvent};
use super::url_util::is_url;
use crate::services::search_client::SearchSuggestionClient;
use crate::types::search::{SearchDetail, SearchResults};
use crate::types::tab::{TabId, WindowId};

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(10);

/// Shared slot holding the latest remote suggestions.
///
/// Writers replace the whole value; readers take a snapshot.
#[derive(Debug, Clone)]
pub struct SearchResultsState {
    tx: Arc<watch::Sender<SearchResults>>,
}

impl Default for SearchResultsState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchResultsState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SearchResults::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> SearchResults {
        self.tx.borrow().clone()
    }

    pub fn publish(&self, results: SearchResults) {
        self.tx.send_replace(results);
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchResults> {
        self.tx.subscribe()
    }
}

/// What the fetcher needs to know about the tab being typed into.
#[derive(Debug, Clone, Default)]
pub struct SearchContext {
    pub offer_search_suggestions: bool,
    /// False while the tab is not yet known to the tab manager.
    pub tab_known: bool,
    /// Engine chosen for this tab (e.g. via a shortcut), if any.
    pub frame_search_detail: Option<SearchDetail>,
    /// The user's default engine.
    pub search_detail: Option<SearchDetail>,
}

struct FetcherInner {
    client: Arc<dyn SearchSuggestionClient>,
    results: SearchResultsState,
    sink: Arc<dyn SuggestionSink>,
    debouncer: Debouncer<(WindowId, TabId)>,
}

#[derive(Clone)]
pub struct SearchSuggestionFetcher {
    inner: Arc<FetcherInner>,
}

impl SearchSuggestionFetcher {
    pub fn new(
        client: Arc<dyn SearchSuggestionClient>,
        results: SearchResultsState,
        sink: Arc<dyn SuggestionSink>,
    ) -> Self {
        Self::with_debounce(client, results, sink, DEFAULT_SEARCH_DEBOUNCE)
    }

    pub fn with_debounce(
        client: Arc<dyn SearchSuggestionClient>,
        results: SearchResultsState,
        sink: Arc<dyn SuggestionSink>,
        delay: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(FetcherInner {
                client,
                results,
                sink,
                debouncer: Debouncer::new(delay),
            }),
        }
    }

    pub fn results(&self) -> &SearchResultsState {
        &self.inner.results
    }

    pub fn debounce(&self) -> Duration {
        self.inner.debouncer.delay()
    }

    pub fn set_debounce(&self, delay: Duration) {
        self.inner.debouncer.set_delay(delay);
    }

    /// Releases the debounce lane of a closed tab.
    pub fn forget_tab(&self, window_id: WindowId, tab_id: TabId) {
        self.inner.debouncer.forget(&(window_id, tab_id));
    }

    /// Debounced per `(window_id, tab_id)`. Fetches remote suggestions for
    /// `input` when search suggestions are on, an autocomplete template is
    /// configured and the input is a non-empty non-URL; otherwise publishes
    /// an empty result so nothing stale lingers.
    pub fn generate_new_search_xhr_results(
        &self,
        ctx: SearchContext,
        window_id: WindowId,
        tab_id: TabId,
        input: &str,
    ) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        let input = input.to_string();

        self.inner
            .debouncer
            .call((window_id, tab_id), move |generation| async move {
                inner.run(ctx, generation, tab_id, input).await;
            })
    }
}

impl FetcherInner {
    async fn run(&self, ctx: SearchContext, generation: Generation, tab_id: TabId, input: String) {
        if !ctx.tab_known {
            tracing::trace!(tab_id, "tab not known yet, skipping search suggestions");
            return;
        }
        let autocomplete_url = match (&ctx.frame_search_detail, &ctx.search_detail) {
            (Some(frame), _) => frame.autocomplete_url.clone(),
            (None, Some(default)) => default.autocomplete_url.clone(),
            (None, None) => return,
        };

        let template = match autocomplete_url {
            Some(t) if ctx.offer_search_suggestions && !input.is_empty() && !is_url(&input) => t,
            _ => return self.publish(tab_id, None, Vec::new()),
        };

        let query = match ctx.search_detail.as_ref().and_then(|d| d.shortcut.as_deref()) {
            Some(shortcut) => strip_shortcut(&input, shortcut),
            None => input.as_str(),
        };
        if query.is_empty() {
            return self.publish(tab_id, None, Vec::new());
        }

        let suggestions = match self.client.fetch_suggestions(&template, query).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::warn!(error = %e, tab_id, "search suggestion fetch failed");
                Vec::new()
            }
        };
        if !generation.is_current() {
            tracing::debug!(tab_id, "dropping stale search suggestions");
            return;
        }
        self.publish(tab_id, Some(query.to_string()), suggestions);
    }

    fn publish(&self, tab_id: TabId, query: Option<String>, suggestions: Vec<String>) {
        self.results.publish(SearchResults {
            tab_id: Some(tab_id),
            query: query.clone(),
            suggestions: suggestions.clone(),
        });
        self.sink.dispatch(UrlBarEvent::SearchResultsAvailable {
            tab_id,
            query,
            results: suggestions,
        });
    }
}

/// Removes one leading `"{shortcut} "` from `input`.
pub fn strip_shortcut<'a>(input: &'a str, shortcut: &str) -> &'a str {
    if shortcut.is_empty() {
        return input;
    }
    input
        .strip_prefix(shortcut)
        .and_then(|rest| rest.strip_prefix(' '))
        .unwrap_or(input)
}
