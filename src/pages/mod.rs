//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its data fetching through the session's API client and
//! delegates shared chrome to `components`. Role checks live in
//! `components::private_route`, never in the pages themselves.

pub mod admin;
pub mod customer;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod request_detail;
pub mod request_form;
pub mod worker;
