//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues bearer-authenticated HTTP calls and `types` defines the JSON
//! schema shared with the backend.

pub mod api;
pub mod types;
