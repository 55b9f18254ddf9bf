//! Helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` is the only module touching `web_sys` directly; `auth` wires the
//! route guard to signals and navigation; `format` renders backend
//! timestamps.

pub mod auth;
pub mod format;
pub mod storage;
