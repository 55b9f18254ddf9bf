//! Session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs one [`SessionStore`] signal and provides it as context.
//! The dashboard guard, sidebar, and role-aware pages read it; only the
//! login page, the guard, and logout mutate it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use portal::SessionStore;
use portal::flows::sign_out;

use crate::util::storage::BrowserStorage;

/// Reactive handle to the session store.
pub type SessionSignal = RwSignal<SessionStore>;

/// Create the session signal and provide it to all descendants.
pub fn provide_session() -> SessionSignal {
    let session = RwSignal::new(SessionStore::new());
    provide_context(session);
    session
}

/// Session signal from context. Panics if called outside `App`.
pub fn use_session() -> SessionSignal {
    expect_context::<SessionSignal>()
}

/// Email of the signed-in user, or an empty string.
pub fn display_email(store: &SessionStore) -> String {
    store.user().map(|user| user.email.clone()).unwrap_or_default()
}

/// Clear browser tokens and the session.
pub fn logout(session: SessionSignal) {
    session.update(|store| sign_out(&BrowserStorage, store));
}
