//! Shared session core for the tenant admin portal.
//!
//! This crate owns everything the browser UI and the command-line client
//! agree on: the backend wire DTOs, the error taxonomy, persisted credential
//! tokens, the session store, and the route guard that gates protected
//! views. It has no HTTP dependency of its own; transports implement
//! [`api::PortalApi`].

pub mod api;
pub mod error;
pub mod flows;
pub mod guard;
pub mod store;
pub mod tokens;
pub mod types;

pub use api::PortalApi;
pub use error::ApiError;
pub use guard::{GuardState, RouteGuard};
pub use store::SessionStore;
pub use tokens::{MemoryStorage, TokenStorage};
pub use types::{Role, User};
