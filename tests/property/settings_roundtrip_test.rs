//! Property-based tests for BrowserSettings serialization round-trip and
//! for the settings accessor used by suggestion sources.

use urlbar_suggest::types::settings::{
    BrowserSettings, DebounceSettings, GeneralSettings, SettingKey, SuggestionLimits,
    SuggestionToggles,
};
use proptest::prelude::*;

fn arb_general_settings() -> impl Strategy<Value = GeneralSettings> {
    "[a-z]{3,10}".prop_map(|default_search_engine| GeneralSettings { default_search_engine })
}

fn arb_toggles() -> impl Strategy<Value = SuggestionToggles> {
    any::<[bool; 5]>().prop_map(|t| SuggestionToggles {
        history_suggestions: t[0],
        bookmark_suggestions: t[1],
        opened_tab_suggestions: t[2],
        offer_search_suggestions: t[3],
        topsite_suggestions: t[4],
    })
}

fn arb_limits() -> impl Strategy<Value = SuggestionLimits> {
    (0..10usize, 0..10usize, 0..10usize, 0..10usize, 0..10usize).prop_map(|(h, a, t, s, top)| {
        SuggestionLimits {
            max_history_sites: h,
            max_about_pages: a,
            max_opened_frames: t,
            max_search: s,
            max_top_sites: top,
        }
    })
}

fn arb_settings() -> impl Strategy<Value = BrowserSettings> {
    (arb_general_settings(), arb_toggles(), arb_limits(), 0..100u64, 0..100u64).prop_map(
        |(general, suggestions, limits, suggestions_ms, search_ms)| BrowserSettings {
            general,
            suggestions,
            limits,
            debounce: DebounceSettings { suggestions_ms, search_ms },
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string(&settings).unwrap();
        let back: BrowserSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, settings);
    }

    /// Every key's dot path addresses the same boolean `get_setting` reads.
    #[test]
    fn setting_key_paths_match_accessor(settings in arb_settings()) {
        let json = serde_json::to_value(&settings).unwrap();
        for key in SettingKey::ALL {
            let pointer = format!("/{}", key.path().replace('.', "/"));
            prop_assert_eq!(json.pointer(&pointer).and_then(|v| v.as_bool()), Some(settings.get_setting(key)));
        }
    }
}
