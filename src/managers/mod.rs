// Browser state managers
// Managers own the collaborator state the URL bar reads: history, bookmarks, open tabs.

pub mod bookmark_manager;
pub mod history_manager;
pub mod tab_manager;
