use super::*;
use crate::util::storage::MemoryStore;

struct FailingStore;

impl KeyValueStore for FailingStore {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// Mount
// =============================================================

#[test]
fn load_from_empty_store_leaves_url_unset() {
    let panel = SettingsPanel::load(&MemoryStore::new());
    assert_eq!(panel, SettingsPanel::default());
    assert!(!panel.has_redirect());
}

#[test]
fn load_seeds_committed_and_draft_from_store() {
    let store = MemoryStore::with_entry(REDIRECT_URL_KEY, "https://foo.test");
    let panel = SettingsPanel::load(&store);
    assert_eq!(panel.redirect_url, "https://foo.test");
    assert_eq!(panel.draft_url, "https://foo.test");
    assert!(!panel.open);
}

// =============================================================
// Open / edit / cancel
// =============================================================

#[test]
fn open_resets_draft_to_committed_value() {
    let mut panel = SettingsPanel { redirect_url: "https://a.test".to_owned(), ..Default::default() };
    panel.edit_draft("stale".to_owned());
    panel.open();
    assert!(panel.open);
    assert_eq!(panel.draft_url, "https://a.test");
}

#[test]
fn cancel_discards_draft_and_keeps_storage() {
    let store = MemoryStore::with_entry(REDIRECT_URL_KEY, "https://foo.test");
    let mut panel = SettingsPanel::load(&store);
    panel.open();
    panel.edit_draft("https://other.test".to_owned());
    panel.cancel();

    assert!(!panel.open);
    assert_eq!(panel.redirect_url, "https://foo.test");
    assert_eq!(store.read(REDIRECT_URL_KEY).as_deref(), Some("https://foo.test"));

    panel.open();
    assert_eq!(panel.draft_url, "https://foo.test");
}

#[test]
fn draft_does_not_leak_into_committed_url() {
    let mut panel = SettingsPanel::default();
    panel.open();
    panel.edit_draft("https://draft.test".to_owned());
    assert!(panel.redirect_url.is_empty());
    assert_eq!(panel.preview_text(), None);
}

// =============================================================
// Save
// =============================================================

#[test]
fn save_commits_persists_and_closes() {
    let store = MemoryStore::new();
    let mut panel = SettingsPanel::load(&store);
    panel.open();
    panel.edit_draft("https://example.com".to_owned());
    panel.save(&store).unwrap();

    assert_eq!(panel.redirect_url, "https://example.com");
    assert_eq!(store.read(REDIRECT_URL_KEY).as_deref(), Some("https://example.com"));
    assert!(!panel.open);
}

#[test]
fn save_without_edit_is_idempotent() {
    let store = MemoryStore::with_entry(REDIRECT_URL_KEY, "https://foo.test");
    let mut panel = SettingsPanel::load(&store);
    panel.open();
    panel.save(&store).unwrap();

    assert_eq!(panel.redirect_url, "https://foo.test");
    assert_eq!(store.read(REDIRECT_URL_KEY).as_deref(), Some("https://foo.test"));
}

#[test]
fn save_accepts_malformed_urls() {
    let store = MemoryStore::new();
    let mut panel = SettingsPanel::default();
    panel.open();
    panel.edit_draft("definitely not a url".to_owned());
    panel.save(&store).unwrap();
    assert_eq!(panel.redirect_url, "definitely not a url");
}

#[test]
fn save_empty_draft_clears_redirect() {
    let store = MemoryStore::with_entry(REDIRECT_URL_KEY, "https://foo.test");
    let mut panel = SettingsPanel::load(&store);
    panel.open();
    panel.edit_draft(String::new());
    panel.save(&store).unwrap();
    assert!(!panel.has_redirect());
    assert_eq!(store.read(REDIRECT_URL_KEY).as_deref(), Some(""));
}

#[test]
fn failed_write_still_commits_for_current_page() {
    let mut panel = SettingsPanel::default();
    panel.open();
    panel.edit_draft("https://example.com".to_owned());
    assert_eq!(panel.save(&FailingStore), Err(StorageError::Unavailable));
    assert_eq!(panel.redirect_url, "https://example.com");
    assert!(!panel.open);
}

#[test]
fn preview_text_shows_committed_url() {
    let panel = SettingsPanel { redirect_url: "https://foo.test".to_owned(), ..Default::default() };
    assert_eq!(panel.preview_text().as_deref(), Some("Redirecting to: https://foo.test"));
}

#[test]
fn each_open_issues_a_new_focus_request() {
    let mut panel = SettingsPanel::default();
    assert_eq!(panel.focus_request(), None);

    panel.open();
    let first = panel.focus_request();
    assert!(first.is_some());

    panel.edit_draft("https://a.test".to_owned());
    assert_eq!(panel.focus_request(), first);

    panel.cancel();
    assert_eq!(panel.focus_request(), None);

    panel.open();
    assert_ne!(panel.focus_request(), first);
}

#[test]
fn preview_stays_present_across_saves_to_new_urls() {
    let store = MemoryStore::new();
    let mut panel = SettingsPanel::default();
    for url in ["https://a.test", "https://b.test"] {
        panel.open();
        panel.edit_draft(url.to_owned());
        panel.save(&store).unwrap();
        assert!(panel.has_redirect());
        assert_eq!(panel.preview_text(), Some(format!("Redirecting to: {url}")));
    }
}
