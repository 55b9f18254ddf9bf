//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected layouts apply identical guard behavior: mount against the
//! current session, resolve the identity once if needed, and navigate to
//! login when the guard settles on `Redirecting`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use portal::{GuardState, RouteGuard};

use crate::state::session::SessionSignal;

/// Mount a guard for the current session and start the identity fetch when
/// no user is held yet.
pub fn mount_guard(session: SessionSignal) -> RwSignal<RouteGuard> {
    let guard = RwSignal::new(RouteGuard::mount(&session.get_untracked()));

    if guard.get_untracked().needs_identity() {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use portal::PortalApi;

            let outcome = crate::net::api::BrowserApi::new().current_user().await;
            let mut settled = guard.get_untracked();
            session.update(|store| {
                settled.resolve(store, outcome);
            });
            guard.set(settled);
        });
    }

    guard
}

/// Whether the host should navigate to the login route.
pub fn should_redirect(guard: &RouteGuard) -> bool {
    guard.state() == GuardState::Redirecting
}

/// Navigate to `/login` once the guard settles on `Redirecting`.
pub fn install_guard_redirect<F>(guard: RwSignal<RouteGuard>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect(&guard.get()) {
            navigate(RouteGuard::LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Text shown while children are withheld.
pub fn pending_message(guard: &RouteGuard) -> &'static str {
    if guard.is_redirecting() { "Redirecting to login..." } else { "Loading..." }
}
