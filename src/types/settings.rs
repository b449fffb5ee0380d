use serde::{Deserialize, Serialize};

/// Top-level browser settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BrowserSettings {
    pub general: GeneralSettings,
    pub suggestions: SuggestionToggles,
    pub limits: SuggestionLimits,
    #[serde(default)]
    pub debounce: DebounceSettings,
}

impl BrowserSettings {
    /// Settings accessor used by the suggestion sources.
    pub fn get_setting(&self, key: SettingKey) -> bool {
        let s = &self.suggestions;
        match key {
            SettingKey::HistorySuggestions => s.history_suggestions,
            SettingKey::BookmarkSuggestions => s.bookmark_suggestions,
            SettingKey::OpenedTabSuggestions => s.opened_tab_suggestions,
            SettingKey::OfferSearchSuggestions => s.offer_search_suggestions,
            SettingKey::TopsiteSuggestions => s.topsite_suggestions,
        }
    }
}

/// Boolean settings consulted while building URL-bar suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    HistorySuggestions,
    BookmarkSuggestions,
    OpenedTabSuggestions,
    OfferSearchSuggestions,
    TopsiteSuggestions,
}

impl SettingKey {
    pub const ALL: [SettingKey; 5] = [
        SettingKey::HistorySuggestions,
        SettingKey::BookmarkSuggestions,
        SettingKey::OpenedTabSuggestions,
        SettingKey::OfferSearchSuggestions,
        SettingKey::TopsiteSuggestions,
    ];

    /// Dot-notation path of the key inside [`BrowserSettings`].
    pub fn path(&self) -> &'static str {
        match self {
            SettingKey::HistorySuggestions => "suggestions.history_suggestions",
            SettingKey::BookmarkSuggestions => "suggestions.bookmark_suggestions",
            SettingKey::OpenedTabSuggestions => "suggestions.opened_tab_suggestions",
            SettingKey::OfferSearchSuggestions => "suggestions.offer_search_suggestions",
            SettingKey::TopsiteSuggestions => "suggestions.topsite_suggestions",
        }
    }
}

/// Settings outside the suggestion toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// Name of the built-in engine used for remote suggestions.
    pub default_search_engine: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            default_search_engine: "google".to_string(),
        }
    }
}

/// Per-source on/off switches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionToggles {
    pub history_suggestions: bool,
    pub bookmark_suggestions: bool,
    pub opened_tab_suggestions: bool,
    pub offer_search_suggestions: bool,
    pub topsite_suggestions: bool,
}

impl Default for SuggestionToggles {
    fn default() -> Self {
        Self {
            history_suggestions: true,
            bookmark_suggestions: true,
            opened_tab_suggestions: true,
            offer_search_suggestions: true,
            topsite_suggestions: true,
        }
    }
}

/// Per-type caps on the number of suggestions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionLimits {
    pub max_history_sites: usize,
    pub max_about_pages: usize,
    pub max_opened_frames: usize,
    pub max_search: usize,
    pub max_top_sites: usize,
}

impl SuggestionLimits {
    /// Upper bound on the length of a merged suggestion list.
    pub fn total(&self) -> usize {
        self.max_history_sites
            + self.max_about_pages
            + self.max_opened_frames
            + self.max_search
            + self.max_top_sites
    }
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self {
            max_history_sites: 3,
            max_about_pages: 2,
            max_opened_frames: 2,
            max_search: 3,
            max_top_sites: 3,
        }
    }
}

/// Trailing-edge delays of the two debounce lanes, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DebounceSettings {
    pub suggestions_ms: u64,
    pub search_ms: u64,
}

impl Default for DebounceSettings {
    fn default() -> Self {
        Self {
            suggestions_ms: 5,
            search_ms: 10,
        }
    }
}
