//! End-to-end tests for the debounced suggestion aggregator.
//!
//! Time is paused so debounce delays elapse deterministically.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use urlbar_suggest::services::site_store::SiteSuggestionStore;
use urlbar_suggest::suggestion::top_sites::TopSites;
use urlbar_suggest::suggestion::{
    filter_suggestion_list_by_type, SuggestionContext, SuggestionEngine, UrlBarEvent,
};
use urlbar_suggest::types::errors::SiteStoreError;
use urlbar_suggest::types::site::{SiteEntry, SiteQueryOptions, TopSiteEntry};
use urlbar_suggest::types::suggestion::{Suggestion, SuggestionType};
use urlbar_suggest::types::tab::Tab;

#[derive(Default)]
struct FakeStore {
    entries: Vec<SiteEntry>,
    fail: bool,
    slow_input: Option<String>,
}

#[async_trait]
impl SiteSuggestionStore for FakeStore {
    async fn query(
        &self,
        input: &str,
        _options: SiteQueryOptions,
    ) -> Result<Vec<SiteEntry>, SiteStoreError> {
        if self.slow_input.as_deref() == Some(input) {
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        if self.fail {
            return Err(SiteStoreError::Unavailable("offline".to_string()));
        }
        Ok(self
            .entries
            .iter()
            .filter(|e| e.location.to_lowercase().contains(input))
            .cloned()
            .collect())
    }
}

fn site(location: &str, title: &str) -> SiteEntry {
    SiteEntry {
        location: location.to_string(),
        title: title.to_string(),
        last_accessed_time: 1,
        visit_count: 1,
        tags: Vec::new(),
    }
}

fn tab(id: u32, url: &str, title: &str, active: bool) -> Tab {
    Tab {
        id,
        window_id: 1,
        url: url.to_string(),
        title: title.to_string(),
        active,
        created_at: 0,
    }
}

fn google_context() -> SuggestionContext {
    SuggestionContext {
        tabs: vec![
            tab(1, "https://news.example/", "News", true),
            tab(2, "https://www.google.com/search?q=rust", "Google Search", false),
        ],
        ..Default::default()
    }
}

fn google_top_sites() -> Arc<TopSites> {
    Arc::new(TopSites::new(vec![
        TopSiteEntry { location: "google.com".to_string(), rank: 1 },
        TopSiteEntry { location: "youtube.com".to_string(), rank: 2 },
    ]))
}

fn engine(store: FakeStore) -> (SuggestionEngine, UnboundedReceiver<UrlBarEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let engine = SuggestionEngine::new(Arc::new(store), google_top_sites(), Arc::new(tx));
    (engine, rx)
}

fn google_store() -> FakeStore {
    FakeStore {
        entries: vec![site("https://google.com/", "Google")],
        ..Default::default()
    }
}

fn types_of(list: &[Suggestion]) -> Vec<SuggestionType> {
    list.iter().map(|s| s.suggestion_type).collect()
}

fn expect_suggestions(event: UrlBarEvent) -> Vec<Suggestion> {
    match event {
        UrlBarEvent::SuggestionsChanged { suggestions, .. } => suggestions,
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_merged_list_follows_source_priority() {
    let (engine, mut rx) = engine(google_store());

    engine
        .generate_new_suggestions_list(google_context(), 1, 2, "Goog")
        .await
        .unwrap();

    let suggestions = expect_suggestions(rx.try_recv().unwrap());
    assert_eq!(
        types_of(&suggestions),
        vec![SuggestionType::History, SuggestionType::Tab, SuggestionType::TopSite]
    );
    assert_eq!(suggestions[0].location, "https://google.com/");
    assert_eq!(suggestions[1].tab_id, Some(2));
    assert_eq!(suggestions[2].location, "google.com");
    assert!(rx.try_recv().is_err(), "exactly one dispatch per burst");
}

#[tokio::test(start_paused = true)]
async fn test_search_results_sit_between_tabs_and_top_sites() {
    let (engine, mut rx) = engine(google_store());
    let mut ctx = google_context();
    ctx.search_results.suggestions = vec!["google maps".to_string(), "https://google.com/maps".to_string()];

    engine.generate_new_suggestions_list(ctx, 1, 2, "goog").await.unwrap();

    let suggestions = expect_suggestions(rx.try_recv().unwrap());
    assert_eq!(
        types_of(&suggestions),
        vec![
            SuggestionType::History,
            SuggestionType::Tab,
            SuggestionType::Search,
            SuggestionType::Search,
            SuggestionType::TopSite,
        ]
    );
    assert_eq!(suggestions[2].location, "google maps");
}

#[tokio::test(start_paused = true)]
async fn test_empty_input_dispatches_nothing() {
    let (engine, mut rx) = engine(google_store());

    engine
        .generate_new_suggestions_list(google_context(), 1, 2, "")
        .await
        .unwrap();

    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_disabled_tab_source_yields_no_tabs() {
    let (engine, mut rx) = engine(google_store());
    let mut ctx = google_context();
    ctx.settings.suggestions.opened_tab_suggestions = false;

    engine.generate_new_suggestions_list(ctx, 1, 2, "goog").await.unwrap();

    let suggestions = expect_suggestions(rx.try_recv().unwrap());
    assert!(!suggestions.is_empty());
    assert!(suggestions.iter().all(|s| s.suggestion_type != SuggestionType::Tab));
}

#[tokio::test(start_paused = true)]
async fn test_burst_only_dispatches_last_input() {
    let (engine, mut rx) = engine(google_store());

    let first = engine.generate_new_suggestions_list(google_context(), 1, 2, "you");
    tokio::time::sleep(Duration::from_millis(1)).await;
    let second = engine.generate_new_suggestions_list(google_context(), 1, 2, "goog");
    first.await.unwrap();
    second.await.unwrap();

    let suggestions = expect_suggestions(rx.try_recv().unwrap());
    assert!(suggestions.iter().any(|s| s.location == "google.com"));
    assert!(suggestions.iter().all(|s| s.location != "youtube.com"));
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_late_older_aggregation_is_dropped() {
    let store = FakeStore {
        slow_input: Some("you".to_string()),
        ..google_store()
    };
    let (engine, mut rx) = engine(store);

    let first = engine.generate_new_suggestions_list(google_context(), 1, 2, "you");
    tokio::time::sleep(Duration::from_millis(20)).await;
    let second = engine.generate_new_suggestions_list(google_context(), 1, 2, "goog");
    second.await.unwrap();
    first.await.unwrap();

    let suggestions = expect_suggestions(rx.try_recv().unwrap());
    assert!(suggestions.iter().any(|s| s.location == "google.com"));
    assert!(rx.try_recv().is_err(), "stale aggregation must not be dispatched");
}

#[tokio::test(start_paused = true)]
async fn test_failing_store_does_not_block_other_sources() {
    let store = FakeStore {
        fail: true,
        ..google_store()
    };
    let (engine, mut rx) = engine(store);

    engine
        .generate_new_suggestions_list(google_context(), 1, 2, "goog")
        .await
        .unwrap();

    let suggestions = expect_suggestions(rx.try_recv().unwrap());
    assert_eq!(
        types_of(&suggestions),
        vec![SuggestionType::Tab, SuggestionType::TopSite]
    );
}

#[tokio::test]
async fn test_suggest_is_one_shot_and_silent() {
    let (engine, mut rx) = engine(google_store());
    let ctx = google_context();

    let list = engine.suggest(&ctx, 1, "about:hist").await;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].suggestion_type, SuggestionType::AboutPages);
    assert!(engine.suggest(&ctx, 1, "").await.is_empty());
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_grouping_preserves_order() {
    let (engine, _rx) = engine(google_store());
    let mut ctx = google_context();
    ctx.tabs.push(tab(3, "https://google.dev/", "Google dev", false));

    let list = engine.suggest(&ctx, 1, "goog").await;
    let grouped = filter_suggestion_list_by_type(&list);

    assert_eq!(grouped.history_suggestions.len(), 1);
    assert_eq!(grouped.tab_suggestions.len(), 2);
    assert_eq!(grouped.top_site_suggestions.len(), 1);
    assert!(grouped.bookmark_suggestions.is_empty());
    let tab_order: Vec<_> = grouped.tab_suggestions.iter().map(|s| s.tab_id).collect();
    let merged_order: Vec<_> = list
        .iter()
        .filter(|s| s.suggestion_type == SuggestionType::Tab)
        .map(|s| s.tab_id)
        .collect();
    assert_eq!(tab_order, merged_order);
}
