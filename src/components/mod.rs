//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, the private-route gate,
//! status badges) and read the session from the auth context installed by
//! `app::App`.

pub mod navbar;
pub mod private_route;
pub mod request_card;
pub mod resource_list;
pub mod status_badge;
