//! Reusable UI components shared by dashboard pages.

pub mod feedback;
pub mod sidebar;
