//! Multi-step auth flows built on [`PortalApi`].
//!
//! These never hold the store across an await when a host cannot lend it
//! (the browser keeps it inside a signal), so [`sign_in`] returns the user
//! and leaves `set_user` to the caller.

#[cfg(test)]
#[path = "flows_test.rs"]
mod flows_test;

use crate::api::PortalApi;
use crate::error::ApiError;
use crate::guard::{GuardState, RouteGuard};
use crate::store::SessionStore;
use crate::tokens::{TokenStorage, store_tokens};
use crate::types::{Credentials, User};

/// Log in, persist both tokens, then resolve the identity they grant.
///
/// # Errors
///
/// Returns the first failing request's error. Tokens are only written after
/// a successful login response.
pub async fn sign_in<A, S>(api: &A, storage: &S, credentials: &Credentials) -> Result<User, ApiError>
where
    A: PortalApi,
    S: TokenStorage,
{
    let tokens = api.login(credentials).await?;
    store_tokens(storage, &tokens);
    let user = api.current_user().await?;
    log::info!("signed in as user {}", user.id);
    Ok(user)
}

/// Mount a guard against `store` and settle it. Issues no request when a
/// session is already held.
pub async fn authorize<A: PortalApi>(api: &A, store: &mut SessionStore) -> GuardState {
    let mut guard = RouteGuard::mount(store);
    if guard.needs_identity() {
        let outcome = api.current_user().await;
        guard.resolve(store, outcome);
    }
    guard.state()
}

/// Clear the session and its persisted tokens.
pub fn sign_out<S: TokenStorage>(storage: &S, store: &mut SessionStore) {
    store.logout(storage);
}
