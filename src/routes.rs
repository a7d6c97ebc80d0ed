//! Route paths shared by the router, redirects, and navigation links.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const PROFILE: &str = "/profile";
pub const CUSTOMER_REQUESTS: &str = "/customer/requests";
pub const CUSTOMER_NEW_REQUEST: &str = "/customer/requests/new";
pub const CUSTOMER_BOOKINGS: &str = "/customer/bookings";
pub const WORKER_REQUESTS: &str = "/worker/requests";
pub const WORKER_BOOKINGS: &str = "/worker/bookings";
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";

/// Detail page of one of the customer's requests.
#[must_use]
pub fn request_detail_path(request_id: &str) -> String {
    format!("{CUSTOMER_REQUESTS}/{request_id}")
}

/// Where a user of `role` lands after signing in.
#[must_use]
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_DASHBOARD,
        Role::Worker => WORKER_REQUESTS,
        Role::Customer => CUSTOMER_REQUESTS,
    }
}

/// A labelled navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

/// Role-specific navigation entries shown in the navbar.
#[must_use]
pub fn nav_links(role: Role) -> &'static [NavLink] {
    match role {
        Role::Customer => &[
            NavLink { label: "My Requests", path: CUSTOMER_REQUESTS },
            NavLink { label: "My Bookings", path: CUSTOMER_BOOKINGS },
        ],
        Role::Worker => &[
            NavLink { label: "Available Jobs", path: WORKER_REQUESTS },
            NavLink { label: "My Bookings", path: WORKER_BOOKINGS },
        ],
        Role::Admin => &[NavLink { label: "Admin Dashboard", path: ADMIN_DASHBOARD }],
    }
}
