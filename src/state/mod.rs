//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Reactive state is provided through Leptos context so components depend on
//! small focused models rather than on the session machinery directly.

pub mod auth;
