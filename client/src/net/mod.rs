//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the portal REST surface over `gloo-net`. Requests go to
//! the same-origin `/api` prefix, which the host server forwards to the
//! backend.

pub mod api;
