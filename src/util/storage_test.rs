use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    assert!(store.get_item("k").is_none());
}

#[test]
fn memory_storage_set_then_get() {
    let store = MemoryStorage::new();
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("v"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_overwrites() {
    let store = MemoryStorage::new();
    store.set_item("k", "old").unwrap();
    store.set_item("k", "new").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("new"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_remove() {
    let store = MemoryStorage::new();
    store.set_item("k", "v").unwrap();
    store.remove_item("k");
    store.remove_item("missing");
    assert!(store.is_empty());
}

#[test]
fn arc_store_shares_items() {
    let store = Arc::new(MemoryStorage::new());
    let alias = Arc::clone(&store);
    alias.set_item("k", "v").unwrap();
    assert_eq!(KeyValueStore::get_item(&store, "k").as_deref(), Some("v"));
}

// =============================================================
// BrowserStorage without a browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    let store = BrowserStorage;
    assert!(store.get_item("k").is_none());
    assert!(matches!(store.set_item("k", "v"), Err(StorageError::Unavailable)));
    store.remove_item("k");
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "localStorage is not available");
    let err = StorageError::Write { key: "k".to_owned(), reason: "QuotaExceeded".to_owned() };
    assert_eq!(err.to_string(), "failed to write k: QuotaExceeded");
}
