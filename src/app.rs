//! App Core for the URL-bar suggestion service.
//!
//! Central struct holding the managers, the settings engine and the two
//! suggestion lanes. Bookmark and history managers borrow the connection,
//! so they are created on demand from `db`.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::database::{Database, SharedDatabase};
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::search_client::SearchSuggestionClient;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::site_store::SqliteSiteStore;
use crate::suggestion::top_sites::TopSites;
use crate::suggestion::{
    SearchContext, SearchResultsState, SearchSuggestionFetcher, SuggestionContext,
    SuggestionEngine, SuggestionSink,
};
use crate::types::search::{find_search_engine, SearchDetail};
use crate::types::settings::SettingKey;
use crate::types::tab::{TabId, WindowId};

pub struct App {
    pub db: SharedDatabase,
    pub tab_manager: TabManager,
    pub settings_engine: SettingsEngine,
    pub top_sites: Arc<TopSites>,
    pub search_results: SearchResultsState,
    pub suggestion_engine: SuggestionEngine,
    pub search_fetcher: SearchSuggestionFetcher,
    /// Private mode switch; `history.record` is refused while false.
    pub history_recording: bool,
    frame_search_details: HashMap<TabId, SearchDetail>,
}

impl App {
    /// Opens (or creates) the database at `db_path`, loads settings and wires
    /// the suggestion lanes to `sink`.
    #[cfg(feature = "network")]
    pub fn new(
        db_path: &str,
        settings_path: Option<String>,
        sink: Arc<dyn SuggestionSink>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let client = crate::services::search_client::HttpSearchClient::new()?;
        Self::open(db_path, settings_path, Arc::new(client), sink)
    }

    #[cfg(not(feature = "network"))]
    pub fn new(
        db_path: &str,
        settings_path: Option<String>,
        sink: Arc<dyn SuggestionSink>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let client = crate::services::search_client::OfflineSearchClient;
        Self::open(db_path, settings_path, Arc::new(client), sink)
    }

    fn open(
        db_path: &str,
        settings_path: Option<String>,
        client: Arc<dyn SearchSuggestionClient>,
        sink: Arc<dyn SuggestionSink>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Database::open(db_path)?;
        let mut settings_engine = SettingsEngine::new(settings_path);
        if let Err(e) = settings_engine.load() {
            tracing::warn!(error = %e, "failed to load settings, using defaults");
        }
        Ok(Self::with_search_client(db, settings_engine, client, sink))
    }

    /// Assembles an app from already-opened parts.
    pub fn with_search_client(
        db: Database,
        settings_engine: SettingsEngine,
        client: Arc<dyn SearchSuggestionClient>,
        sink: Arc<dyn SuggestionSink>,
    ) -> Self {
        let db = db.into_shared();
        let debounce = settings_engine.get_settings().debounce.clone();
        let top_sites = Arc::new(TopSites::builtin());
        let search_results = SearchResultsState::new();

        let suggestion_engine = SuggestionEngine::with_debounce(
            Arc::new(SqliteSiteStore::new(db.clone())),
            top_sites.clone(),
            sink.clone(),
            Duration::from_millis(debounce.suggestions_ms),
        );
        let search_fetcher = SearchSuggestionFetcher::with_debounce(
            client,
            search_results.clone(),
            sink,
            Duration::from_millis(debounce.search_ms),
        );

        Self {
            db,
            tab_manager: TabManager::new(),
            settings_engine,
            top_sites,
            search_results,
            suggestion_engine,
            search_fetcher,
            history_recording: true,
            frame_search_details: HashMap::new(),
        }
    }

    /// Snapshot handed to the suggestion adapters.
    pub fn suggestion_context(&self) -> SuggestionContext {
        SuggestionContext {
            settings: self.settings_engine.get_settings().clone(),
            tabs: self.tab_manager.all_tabs().to_vec(),
            search_results: self.search_results.snapshot(),
        }
    }

    pub fn search_context(&self, tab_id: TabId) -> SearchContext {
        let settings = self.settings_engine.get_settings();
        SearchContext {
            offer_search_suggestions: settings.get_setting(SettingKey::OfferSearchSuggestions),
            tab_known: self.tab_manager.get_tab(tab_id).is_some(),
            frame_search_detail: self.frame_search_details.get(&tab_id).cloned(),
            search_detail: find_search_engine(&settings.general.default_search_engine),
        }
    }

    /// Overrides the search engine used for one tab; `None` clears it.
    pub fn set_frame_search_detail(&mut self, tab_id: TabId, detail: Option<SearchDetail>) {
        match detail {
            Some(detail) => {
                self.frame_search_details.insert(tab_id, detail);
            }
            None => {
                self.frame_search_details.remove(&tab_id);
            }
        }
    }

    /// A keystroke in the URL bar: kicks off both debounced lanes.
    pub fn on_url_input(&self, window_id: WindowId, tab_id: TabId, input: &str) {
        self.search_fetcher
            .generate_new_search_xhr_results(self.search_context(tab_id), window_id, tab_id, input);
        self.suggestion_engine
            .generate_new_suggestions_list(self.suggestion_context(), window_id, tab_id, input);
    }

    /// Pushes the current `debounce` settings into both lanes. Calls
    /// already waiting keep the delay they were scheduled with.
    pub fn apply_debounce_settings(&self) {
        let debounce = &self.settings_engine.get_settings().debounce;
        self.suggestion_engine
            .set_debounce(Duration::from_millis(debounce.suggestions_ms));
        self.search_fetcher
            .set_debounce(Duration::from_millis(debounce.search_ms));
    }

    /// Drops per-tab state once a tab is gone.
    pub fn forget_tab(&mut self, window_id: WindowId, tab_id: TabId) {
        self.frame_search_details.remove(&tab_id);
        self.search_fetcher.forget_tab(window_id, tab_id);
    }
}
