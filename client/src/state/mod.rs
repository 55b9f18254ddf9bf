//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only process-wide state is the session. Page data (employee lists,
//! form drafts) stays in page-local signals.

pub mod session;
