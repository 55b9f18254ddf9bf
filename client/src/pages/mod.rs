//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, submit
//! handlers, inline messages) and keeps non-markup decisions in plain
//! functions next to it so they can be unit-tested.

pub mod activities;
pub mod company;
pub mod dashboard;
pub mod employees;
pub mod insights;
pub mod login;
pub mod overview;
