// Services back the suggestion engine: persisted settings, the site
// suggestion store and remote search-suggestion lookups.

pub mod search_client;
pub mod settings_engine;
pub mod site_store;
