use serde::{Deserialize, Serialize};

pub type WindowId = u32;
pub type TabId = u32;

/// Represents an open browser tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub window_id: WindowId,
    pub url: String,
    pub title: String,
    pub active: bool,
    pub created_at: i64,
}
