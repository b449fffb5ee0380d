use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::errors::TabError;
use crate::types::tab::{Tab, TabId, WindowId};

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    fn create_tab(&mut self, window_id: WindowId, url: Option<&str>, active: bool) -> TabId;
    fn close_tab(&mut self, tab_id: TabId) -> Result<(), TabError>;
    fn switch_tab(&mut self, tab_id: TabId) -> Result<(), TabError>;
    fn update_tab_url(&mut self, tab_id: TabId, url: &str) -> Result<(), TabError>;
    fn update_tab_title(&mut self, tab_id: TabId, title: &str) -> Result<(), TabError>;
    fn get_tab(&self, tab_id: TabId) -> Option<&Tab>;
    fn get_tabs_by_window_id(&self, window_id: WindowId) -> Vec<&Tab>;
    fn get_active_tab(&self, window_id: WindowId) -> Option<&Tab>;
    fn tab_count(&self) -> usize;
}

/// In-memory tab registry spanning all browser windows.
///
/// Tabs keep creation order within their window, and a non-empty window
/// always has exactly one active tab.
pub struct TabManager {
    tabs: Vec<Tab>,
    next_id: TabId,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            next_id: 1,
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Every open tab, in creation order.
    pub fn all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn find_tab_index(&self, tab_id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn activate(&mut self, window_id: WindowId, tab_id: TabId) {
        for tab in self.tabs.iter_mut().filter(|t| t.window_id == window_id) {
            tab.active = tab.id == tab_id;
        }
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Opens a tab in `window_id`. The first tab of a window is always active.
    fn create_tab(&mut self, window_id: WindowId, url: Option<&str>, active: bool) -> TabId {
        let id = self.next_id;
        self.next_id += 1;

        let first_in_window = !self.tabs.iter().any(|t| t.window_id == window_id);
        let url = url.unwrap_or("about:blank").to_string();
        self.tabs.push(Tab {
            id,
            window_id,
            title: url.clone(),
            url,
            active: false,
            created_at: Self::now(),
        });
        if active || first_in_window {
            self.activate(window_id, id);
        }
        id
    }

    /// Closes a tab. If it was active, its nearest remaining neighbour in the
    /// same window becomes active.
    fn close_tab(&mut self, tab_id: TabId) -> Result<(), TabError> {
        let idx = self
            .find_tab_index(tab_id)
            .ok_or(TabError::NotFound(tab_id))?;
        let window_id = self.tabs[idx].window_id;
        let position = self
            .tabs
            .iter()
            .filter(|t| t.window_id == window_id)
            .position(|t| t.id == tab_id)
            .unwrap_or(0);
        let was_active = self.tabs.remove(idx).active;

        if was_active {
            let remaining: Vec<TabId> = self
                .tabs
                .iter()
                .filter(|t| t.window_id == window_id)
                .map(|t| t.id)
                .collect();
            if let Some(&next) = remaining.get(position.min(remaining.len().saturating_sub(1))) {
                self.activate(window_id, next);
            }
        }
        Ok(())
    }

    fn switch_tab(&mut self, tab_id: TabId) -> Result<(), TabError> {
        let window_id = self
            .get_tab(tab_id)
            .map(|t| t.window_id)
            .ok_or(TabError::NotFound(tab_id))?;
        self.activate(window_id, tab_id);
        Ok(())
    }

    fn update_tab_url(&mut self, tab_id: TabId, url: &str) -> Result<(), TabError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or(TabError::NotFound(tab_id))?;
        tab.url = url.to_string();
        Ok(())
    }

    fn update_tab_title(&mut self, tab_id: TabId, title: &str) -> Result<(), TabError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or(TabError::NotFound(tab_id))?;
        tab.title = title.to_string();
        Ok(())
    }

    fn get_tab(&self, tab_id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_tabs_by_window_id(&self, window_id: WindowId) -> Vec<&Tab> {
        self.tabs.iter().filter(|t| t.window_id == window_id).collect()
    }

    fn get_active_tab(&self, window_id: WindowId) -> Option<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.window_id == window_id && t.active)
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
