//! Persisted credential tokens.
//!
//! Tokens live outside the session store in a key-value area addressed by
//! fixed keys. The browser build backs this with `localStorage`, the CLI with
//! a JSON file, and tests with [`MemoryStorage`].

#[cfg(test)]
#[path = "tokens_test.rs"]
mod tokens_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::types::TokenPair;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Key-value persistence for opaque token strings.
///
/// Writes are best-effort: a backend that cannot persist logs and moves on,
/// the same way a blocked `localStorage` is ignored.
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: TokenStorage + ?Sized> TokenStorage for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// Write both tokens from a login response.
pub fn store_tokens(storage: &impl TokenStorage, tokens: &TokenPair) {
    storage.set(ACCESS_TOKEN_KEY, &tokens.access_token);
    storage.set(REFRESH_TOKEN_KEY, &tokens.refresh_token);
}

/// Erase both tokens. Safe to call when nothing is stored.
pub fn clear_tokens(storage: &impl TokenStorage) {
    storage.remove(ACCESS_TOKEN_KEY);
    storage.remove(REFRESH_TOKEN_KEY);
}

/// Current access token, if one has been stored.
pub fn access_token(storage: &impl TokenStorage) -> Option<String> {
    storage.get(ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
}

/// `Authorization` header value for the stored access token.
pub fn bearer_header(storage: &impl TokenStorage) -> Option<String> {
    access_token(storage).map(|token| format!("Bearer {token}"))
}

/// In-process storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
