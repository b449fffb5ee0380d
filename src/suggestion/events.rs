//! Events the engine publishes to the URL-bar front end.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

use crate::types::suggestion::SuggestionList;
use crate::types::tab::{TabId, WindowId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UrlBarEvent {
    /// A fresh merged suggestion list for a window.
    SuggestionsChanged {
        window_id: WindowId,
        suggestions: SuggestionList,
    },
    /// Remote search suggestions for a tab; `query` is `None` when the
    /// fetch was skipped and `results` is empty.
    SearchResultsAvailable {
        tab_id: TabId,
        query: Option<String>,
        results: Vec<String>,
    },
}

/// Receiver of engine output, injected at construction.
pub trait SuggestionSink: Send + Sync {
    fn dispatch(&self, event: UrlBarEvent);
}

impl SuggestionSink for UnboundedSender<UrlBarEvent> {
    fn dispatch(&self, event: UrlBarEvent) {
        if self.send(event).is_err() {
            tracing::debug!("url bar event dropped, receiver closed");
        }
    }
}
