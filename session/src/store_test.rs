use super::*;

#[test]
fn empty_store_loads_nothing() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.load(), None);
    assert_eq!(store.key(), DEFAULT_TOKEN_KEY);
}

#[test]
fn save_then_load_returns_exact_bytes() {
    let store = MemoryTokenStore::new();
    store.save("a.b.c");
    assert_eq!(store.load().as_deref(), Some("a.b.c"));
    assert_eq!(store.get("token").as_deref(), Some("a.b.c"));
}

#[test]
fn save_replaces_previous_value() {
    let store = MemoryTokenStore::seeded("old");
    store.save("new");
    assert_eq!(store.load().as_deref(), Some("new"));
}

#[test]
fn clear_is_idempotent() {
    let store = MemoryTokenStore::seeded("x.y.z");
    store.clear();
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn clones_share_storage() {
    let store = MemoryTokenStore::new();
    let other_tab = store.clone();
    store.save("shared");
    assert_eq!(other_tab.load().as_deref(), Some("shared"));
    other_tab.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn custom_key_does_not_touch_default_slot() {
    let store = MemoryTokenStore::with_key("cars_token");
    store.save("v");
    assert_eq!(store.get("cars_token").as_deref(), Some("v"));
    assert_eq!(store.get(DEFAULT_TOKEN_KEY), None);
}
