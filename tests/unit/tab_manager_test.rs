use darkmin::managers::tab_manager::{TabManager, TabManagerTrait};
use darkmin::types::errors::TabError;
use darkmin::types::tab::Tab;

fn open(mgr: &mut TabManager, url: Option<&str>, title: Option<&str>) -> String {
    let id = TabManager::new_tab_id();
    mgr.add_tab(Tab {
        id: id.clone(),
        url: url.unwrap_or("about:blank").to_string(),
        title: title.unwrap_or("New Tab").to_string(),
    });
    id
}

#[test]
fn test_add_tab_returns_unique_ids() {
    let mut mgr = TabManager::new();
    let id1 = open(&mut mgr, None, None);
    let id2 = open(&mut mgr, None, None);
    assert_ne!(id1, id2);
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_add_tab_becomes_active() {
    let mut mgr = TabManager::new();
    open(&mut mgr, Some("https://a.test"), None);
    let id2 = open(&mut mgr, Some("https://b.test"), None);
    assert_eq!(mgr.get_active_tab().unwrap().id, id2);
    assert_eq!(mgr.active_index(), Some(1));
}

#[test]
fn test_add_tab_defaults() {
    let mut mgr = TabManager::new();
    let id = open(&mut mgr, None, None);
    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.url, "about:blank");
    assert_eq!(tab.title, "New Tab");
}

#[test]
fn test_add_tab_with_url_and_title() {
    let mut mgr = TabManager::new();
    let id = open(&mut mgr, Some("https://www.google.com"), Some("Google"));
    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.url, "https://www.google.com");
    assert_eq!(tab.title, "Google");
}

#[test]
fn test_close_last_tab_is_refused() {
    let mut mgr = TabManager::new();
    let id = open(&mut mgr, None, None);
    assert_eq!(mgr.close_tab(0), Ok(None));
    assert_eq!(mgr.tab_count(), 1);
    assert_eq!(mgr.get_active_tab().unwrap().id, id);
}

#[test]
fn test_close_tab_out_of_range() {
    let mut mgr = TabManager::new();
    open(&mut mgr, None, None);
    open(&mut mgr, None, None);
    assert_eq!(mgr.close_tab(5), Err(TabError::InvalidIndex(5)));
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_close_active_tab_activates_slot_neighbor() {
    let mut mgr = TabManager::new();
    let id1 = open(&mut mgr, None, None);
    let id2 = open(&mut mgr, None, None);
    let id3 = open(&mut mgr, None, None);
    mgr.switch_tab(1).unwrap();

    let removed = mgr.close_tab(1).unwrap().unwrap();
    assert_eq!(removed.id, id2);
    // id3 slides into slot 1
    assert_eq!(mgr.get_active_tab().unwrap().id, id3);

    mgr.close_tab(1).unwrap();
    assert_eq!(mgr.get_active_tab().unwrap().id, id1);
}

#[test]
fn test_close_inactive_tab_keeps_active() {
    let mut mgr = TabManager::new();
    open(&mut mgr, None, None);
    let id2 = open(&mut mgr, None, None);
    mgr.close_tab(0).unwrap();
    assert_eq!(mgr.get_active_tab().unwrap().id, id2);
    assert_eq!(mgr.active_index(), Some(0));
}

#[test]
fn test_switch_tab() {
    let mut mgr = TabManager::new();
    let id1 = open(&mut mgr, None, None);
    open(&mut mgr, None, None);
    mgr.switch_tab(0).unwrap();
    assert_eq!(mgr.get_active_tab().unwrap().id, id1);
    assert_eq!(mgr.switch_tab(9), Err(TabError::InvalidIndex(9)));
}

#[test]
fn test_index_of() {
    let mut mgr = TabManager::new();
    let id1 = open(&mut mgr, None, None);
    let id2 = open(&mut mgr, None, None);
    assert_eq!(mgr.index_of(&id2), Some(1));
    assert_eq!(mgr.index_of(&id1), Some(0));
    assert_eq!(mgr.index_of("missing"), None);
}

#[test]
fn test_update_url_and_title() {
    let mut mgr = TabManager::new();
    let id = open(&mut mgr, None, None);
    mgr.update_tab_url(&id, "https://example.com").unwrap();
    mgr.update_tab_title(&id, "Example Domain").unwrap();
    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.url, "https://example.com");
    assert_eq!(tab.title, "Example Domain");
}

#[test]
fn test_update_unknown_tab_is_not_found() {
    let mut mgr = TabManager::new();
    assert_eq!(
        mgr.update_tab_url("nope", "https://x"),
        Err(TabError::NotFound("nope".to_string()))
    );
    assert!(mgr.update_tab_title("nope", "x").is_err());
}

#[test]
fn test_get_all_tabs_in_order() {
    let mut mgr = TabManager::new();
    let ids: Vec<String> = (0..3).map(|_| open(&mut mgr, None, None)).collect();
    let listed: Vec<String> = mgr.get_all_tabs().iter().map(|t| t.id.clone()).collect();
    assert_eq!(listed, ids);
}
