use urlbar_suggest::managers::tab_manager::{TabManager, TabManagerTrait};
use urlbar_suggest::types::errors::TabError;

#[test]
fn test_create_tab_returns_unique_ids() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(1, None, true);
    let id2 = mgr.create_tab(1, None, false);
    assert_ne!(id1, id2);
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_create_tab_sets_active_when_first_in_window() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(1, Some("https://example.com"), false);
    assert_eq!(mgr.get_active_tab(1).unwrap().id, id);

    let other = mgr.create_tab(2, None, false);
    assert_eq!(mgr.get_active_tab(2).unwrap().id, other);
    assert_eq!(mgr.get_active_tab(1).unwrap().id, id, "windows keep separate active tabs");
}

#[test]
fn test_create_tab_default_url() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(1, None, true);
    assert_eq!(mgr.get_tab(id).unwrap().url, "about:blank");
}

#[test]
fn test_new_active_tab_deactivates_previous() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(1, None, true);
    let id2 = mgr.create_tab(1, None, true);
    assert!(!mgr.get_tab(id1).unwrap().active);
    assert!(mgr.get_tab(id2).unwrap().active);
}

#[test]
fn test_close_active_tab_switches_to_neighbor() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(1, None, true);
    let id2 = mgr.create_tab(1, None, false);
    let id3 = mgr.create_tab(1, None, false);

    mgr.switch_tab(id2).unwrap();
    mgr.close_tab(id2).unwrap();
    assert_eq!(mgr.get_active_tab(1).unwrap().id, id3);

    mgr.close_tab(id3).unwrap();
    assert_eq!(mgr.get_active_tab(1).unwrap().id, id1);

    mgr.close_tab(id1).unwrap();
    assert!(mgr.get_active_tab(1).is_none());
    assert_eq!(mgr.tab_count(), 0);
}

#[test]
fn test_close_unknown_tab_fails() {
    let mut mgr = TabManager::new();
    assert!(matches!(mgr.close_tab(99), Err(TabError::NotFound(99))));
}

#[test]
fn test_update_url_and_title() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(1, None, true);
    mgr.update_tab_url(id, "https://tokio.rs").unwrap();
    mgr.update_tab_title(id, "Tokio").unwrap();

    let tab = mgr.get_tab(id).unwrap();
    assert_eq!(tab.url, "https://tokio.rs");
    assert_eq!(tab.title, "Tokio");
    assert!(mgr.update_tab_title(42, "x").is_err());
}

#[test]
fn test_tabs_by_window_id_keeps_creation_order() {
    let mut mgr = TabManager::new();
    let a = mgr.create_tab(1, Some("https://a.com"), true);
    let _ = mgr.create_tab(2, Some("https://b.com"), true);
    let c = mgr.create_tab(1, Some("https://c.com"), false);

    let ids: Vec<_> = mgr.get_tabs_by_window_id(1).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a, c]);
    assert!(mgr.get_tabs_by_window_id(3).is_empty());
    assert_eq!(mgr.all_tabs().len(), 3);
}
