use super::*;
use crate::net::types::User;

fn make_user(role: Role) -> User {
    User {
        id: "1".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        role,
        created_at: None,
        active: true,
        phone: None,
        address: None,
    }
}

fn signed_in(role: Role) -> AuthState {
    AuthState { user: Some(make_user(role)), is_authenticated: true, loading: false }
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn loading_wins_over_everything() {
    let state = AuthState { loading: true, ..signed_in(Role::Admin) };
    assert_eq!(evaluate(&state, Some(Role::Admin)), GuardDecision::Loading);
    assert_eq!(evaluate(&AuthState::loading(), None), GuardDecision::Loading);
}

#[test]
fn signed_out_is_denied() {
    let state = AuthState::default();
    assert_eq!(evaluate(&state, None), GuardDecision::DeniedUnauthenticated);
    assert_eq!(evaluate(&state, Some(Role::Customer)), GuardDecision::DeniedUnauthenticated);
}

#[test]
fn expired_session_with_stray_user_is_denied() {
    let state = AuthState { is_authenticated: false, ..signed_in(Role::Admin) };
    assert_eq!(evaluate(&state, Some(Role::Admin)), GuardDecision::DeniedUnauthenticated);
}

#[test]
fn token_without_user_is_denied() {
    let state = AuthState { user: None, is_authenticated: true, loading: false };
    assert_eq!(evaluate(&state, None), GuardDecision::DeniedUnauthenticated);
}

#[test]
fn worker_on_admin_route_is_sent_home() {
    assert_eq!(evaluate(&signed_in(Role::Worker), Some(Role::Admin)), GuardDecision::DeniedWrongRole);
}

#[test]
fn admin_on_admin_route_is_allowed() {
    assert_eq!(evaluate(&signed_in(Role::Admin), Some(Role::Admin)), GuardDecision::Allowed);
}

#[test]
fn any_role_passes_unrestricted_route() {
    for role in [Role::Customer, Role::Worker, Role::Admin] {
        assert_eq!(evaluate(&signed_in(role), None), GuardDecision::Allowed);
    }
}

// =============================================================
// redirect_path
// =============================================================

#[test]
fn redirect_paths_for_denials() {
    assert_eq!(GuardDecision::DeniedUnauthenticated.redirect_path(), Some("/login"));
    assert_eq!(GuardDecision::DeniedWrongRole.redirect_path(), Some("/"));
    assert_eq!(GuardDecision::Allowed.redirect_path(), None);
    assert_eq!(GuardDecision::Loading.redirect_path(), None);
}
