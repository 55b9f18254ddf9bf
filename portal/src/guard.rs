//! Route guard for protected views.
//!
//! DESIGN
//! ======
//! The guard is an explicit state machine so hosts and tests observe named
//! states instead of side-effecting navigation:
//!
//! ```text
//! mount ──(no user)──▶ Checking ──identity ok──▶ Authorized
//!   │                     └──────any error────▶ Redirecting
//!   └──(user held)───────────────────────────▶ Authorized
//! ```
//!
//! `Authorized` and `Redirecting` are terminal for the lifetime of a mount.
//! Children render only in `Authorized`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::error::ApiError;
use crate::store::SessionStore;
use crate::types::User;

/// Named states of a mounted guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Waiting on the identity fetch; only a loading indicator may render.
    #[default]
    Checking,
    /// A session is confirmed; children render.
    Authorized,
    /// The identity fetch failed; the host navigates to login.
    Redirecting,
}

/// Guard instance for one mount of a protected shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteGuard {
    state: GuardState,
}

impl RouteGuard {
    /// Path the host navigates to on `Redirecting`.
    pub const LOGIN_PATH: &'static str = "/login";

    /// Enter the guard. A held session skips straight to `Authorized`.
    #[must_use]
    pub fn mount(store: &SessionStore) -> Self {
        let state = if store.is_authenticated() { GuardState::Authorized } else { GuardState::Checking };
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Whether the host must issue an identity fetch.
    #[must_use]
    pub fn needs_identity(&self) -> bool {
        self.state == GuardState::Checking
    }

    /// Whether protected children may render.
    #[must_use]
    pub fn renders_children(&self) -> bool {
        self.state == GuardState::Authorized
    }

    #[must_use]
    pub fn is_redirecting(&self) -> bool {
        self.state == GuardState::Redirecting
    }

    /// Apply the identity-fetch outcome. Only meaningful while `Checking`;
    /// later outcomes are ignored. Failures never retry and leave the store
    /// untouched.
    pub fn resolve(&mut self, store: &mut SessionStore, outcome: Result<User, ApiError>) -> GuardState {
        if self.state != GuardState::Checking {
            return self.state;
        }
        self.state = match outcome {
            Ok(user) => {
                store.set_user(Some(user));
                GuardState::Authorized
            }
            Err(e) => {
                log::warn!("guard: identity check failed, redirecting to login: {e}");
                GuardState::Redirecting
            }
        };
        self.state
    }
}
