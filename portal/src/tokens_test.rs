use super::*;

fn pair() -> TokenPair {
    TokenPair { access_token: "acc-1".to_owned(), refresh_token: "ref-1".to_owned() }
}

#[test]
fn store_tokens_writes_both_fixed_keys() {
    let storage = MemoryStorage::new();
    store_tokens(&storage, &pair());
    assert_eq!(storage.get("access_token").as_deref(), Some("acc-1"));
    assert_eq!(storage.get("refresh_token").as_deref(), Some("ref-1"));
}

#[test]
fn clear_tokens_removes_both_and_is_idempotent() {
    let storage = MemoryStorage::new();
    store_tokens(&storage, &pair());
    clear_tokens(&storage);
    assert!(storage.is_empty());
    clear_tokens(&storage);
    assert!(storage.is_empty());
}

#[test]
fn clear_tokens_leaves_unrelated_keys() {
    let storage = MemoryStorage::new();
    storage.set("theme", "dark");
    store_tokens(&storage, &pair());
    clear_tokens(&storage);
    assert_eq!(storage.len(), 1);
    assert_eq!(storage.get("theme").as_deref(), Some("dark"));
}

#[test]
fn bearer_header_uses_access_token() {
    let storage = MemoryStorage::new();
    assert_eq!(bearer_header(&storage), None);
    store_tokens(&storage, &pair());
    assert_eq!(bearer_header(&storage).as_deref(), Some("Bearer acc-1"));
}

#[test]
fn empty_access_token_counts_as_absent() {
    let storage = MemoryStorage::new();
    storage.set(ACCESS_TOKEN_KEY, "");
    assert_eq!(access_token(&storage), None);
}

#[test]
fn storage_reference_forwards_calls() {
    let storage = MemoryStorage::new();
    let by_ref = &storage;
    by_ref.set("k", "v");
    assert_eq!(TokenStorage::get(&by_ref, "k").as_deref(), Some("v"));
}
