//! Role gate in front of private routes.
//!
//! Evaluated on every render from the current `AuthState` alone; nothing is
//! remembered between evaluations.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::routes;
use crate::state::auth::AuthState;

/// Outcome of guarding a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The session has not been read yet.
    Loading,
    /// No live session; send the visitor to the login page.
    DeniedUnauthenticated,
    /// Signed in with a different role; send the user home.
    DeniedWrongRole,
    /// Render the guarded content.
    Allowed,
}

impl GuardDecision {
    /// Redirect target for a denial.
    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::DeniedUnauthenticated => Some(routes::LOGIN),
            Self::DeniedWrongRole => Some(routes::HOME),
            Self::Loading | Self::Allowed => None,
        }
    }
}

/// Decide whether `state` may see a route that requires `required_role`.
///
/// A token without a stored user is not enough: the session only counts once
/// both halves are present.
#[must_use]
pub fn evaluate(state: &AuthState, required_role: Option<Role>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    let Some(user) = state.signed_in_user() else {
        return GuardDecision::DeniedUnauthenticated;
    };
    match required_role {
        Some(role) if role != user.role => GuardDecision::DeniedWrongRole,
        _ => GuardDecision::Allowed,
    }
}
