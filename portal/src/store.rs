//! Session store: the single source of truth for who is logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once by the host (a Leptos context signal in the browser, a
//! local value in the CLI) and handed to every view that gates on identity.
//! `set_user` and `logout` are its only mutators.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::tokens::{TokenStorage, clear_tokens};
use crate::types::{Role, User};

/// Client-held session. Authentication is derived from the held user, so
/// the two can never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    user: Option<User>,
}

impl SessionStore {
    /// Empty, unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session already holding `user`.
    #[must_use]
    pub fn with_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Role of the held user, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(Role::is_admin)
    }

    /// Whether `id` is the held user's id.
    #[must_use]
    pub fn is_self(&self, id: i64) -> bool {
        self.user.as_ref().is_some_and(|user| user.id == id)
    }

    /// Replace the stored identity. The shape is trusted as returned by the
    /// backend.
    pub fn set_user(&mut self, user: Option<User>) {
        match &user {
            Some(u) => log::debug!("session: user {} ({}) set", u.id, u.role.as_str()),
            None => log::debug!("session: user cleared"),
        }
        self.user = user;
    }

    /// Erase persisted tokens and drop the identity. Idempotent.
    pub fn logout(&mut self, storage: &impl TokenStorage) {
        clear_tokens(storage);
        if self.user.take().is_some() {
            log::info!("session: logged out");
        }
    }
}
