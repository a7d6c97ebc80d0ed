use std::rc::Rc;

use serde_json::json;

use super::*;
use crate::net::types::LoginResponse;
use crate::session::{FixedClock, MemoryStorage};

const NOW_MS: i64 = 1_700_000_000_000;

fn make_user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role,
        created_at: None,
        active: true,
        phone: None,
        address: None,
    }
}

fn store_on(storage: &MemoryStorage) -> SessionStore {
    SessionStore::new(Rc::new(storage.clone()), Rc::new(FixedClock::new(NOW_MS)))
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.loading);
}

#[test]
fn auth_state_loading_constructor() {
    let state = AuthState::loading();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn signed_in_user_requires_authentication() {
    let stale = AuthState { user: Some(make_user(Role::Worker)), is_authenticated: false, loading: false };
    assert!(stale.signed_in_user().is_none());
    assert_eq!(stale.role(), None);

    let live = AuthState { is_authenticated: true, ..stale };
    assert_eq!(live.role(), Some(Role::Worker));
}

// =============================================================
// use_auth_state
// =============================================================

#[test]
fn use_auth_state_starts_loaded_and_follows_other_tabs() {
    let storage = MemoryStorage::new();
    let this_tab = store_on(&storage);
    let other_tab = store_on(&storage.open_tab());

    let owner = Owner::new();
    owner.with(|| {
        let state = use_auth_state(this_tab.clone());
        assert!(!state.get_untracked().loading);
        assert!(!state.get_untracked().is_authenticated);

        let token = crate::session::token::unsigned_token(&json!({ "exp": NOW_MS / 1000 + 60 }));
        other_tab
            .login(&LoginResponse { token, user: make_user(Role::Customer) })
            .unwrap();

        let state = state.get_untracked();
        assert!(state.is_authenticated);
        assert_eq!(state.role(), Some(Role::Customer));
    });
}

#[test]
fn server_placeholder_keeps_state_loading() {
    let owner = Owner::new();
    owner.with(|| {
        let state = use_auth_state(SessionStore::server_placeholder()).get_untracked();
        assert!(state.loading);
        assert_eq!(
            crate::session::guard::evaluate(&state, None),
            crate::session::GuardDecision::Loading
        );
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn environment_store_without_hydrate_renders_loading() {
    let owner = Owner::new();
    owner.with(|| {
        let state = use_auth_state(SessionStore::for_environment()).get_untracked();
        assert!(state.loading);
        assert_eq!(
            crate::session::guard::evaluate(&state, Some(Role::Admin)),
            crate::session::GuardDecision::Loading
        );
    });
}
