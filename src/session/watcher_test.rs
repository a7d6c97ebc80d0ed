use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use super::*;
use crate::net::types::{LoginResponse, Role, User};
use crate::session::clock::FixedClock;
use crate::session::storage::{MemoryStorage, StorageBackend};
use crate::session::token;

const NOW_MS: i64 = 1_700_000_000_000;

// =============================================================
// Helpers
// =============================================================

struct Tab {
    storage: MemoryStorage,
    store: SessionStore,
}

impl Tab {
    fn first() -> Self {
        Self::on(MemoryStorage::new())
    }

    fn on(storage: MemoryStorage) -> Self {
        let store = SessionStore::new(Rc::new(storage.clone()), Rc::new(FixedClock::new(NOW_MS)));
        Self { storage, store }
    }

    fn sibling(&self) -> Self {
        Self::on(self.storage.open_tab())
    }
}

fn make_user(name: &str, role: Role) -> User {
    User {
        id: "1".to_owned(),
        name: name.to_owned(),
        email: "user@example.com".to_owned(),
        role,
        created_at: None,
        active: true,
        phone: None,
        address: None,
    }
}

fn live_token() -> String {
    token::unsigned_token(&json!({ "exp": NOW_MS / 1000 + 3600 }))
}

fn watch(store: &SessionStore) -> (AuthWatcher, Rc<RefCell<Vec<AuthState>>>) {
    let published = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&published);
    let watcher = AuthWatcher::activate(store.clone(), move |state: &AuthState| sink.borrow_mut().push(state.clone()));
    (watcher, published)
}

// =============================================================
// Activation
// =============================================================

#[test]
fn activation_publishes_loading_then_loaded() {
    let tab = Tab::first();
    let (watcher, published) = watch(&tab.store);

    let published = published.borrow();
    assert_eq!(published.len(), 2);
    assert!(published[0].loading);
    assert!(!published[1].loading);
    assert!(!published[1].is_authenticated);
    assert_eq!(watcher.current(), published[1]);
}

#[test]
fn activation_reads_existing_session() {
    let tab = Tab::first();
    let user = make_user("Ana", Role::Customer);
    tab.store
        .login(&LoginResponse { token: live_token(), user: user.clone() })
        .unwrap();

    let (watcher, _) = watch(&tab.store);
    let state = watcher.current();
    assert!(state.is_authenticated);
    assert_eq!(state.user, Some(user));
}

// =============================================================
// Same-tab updates
// =============================================================

#[test]
fn login_in_same_tab_publishes_once() {
    let tab = Tab::first();
    let (watcher, published) = watch(&tab.store);
    let before = published.borrow().len();

    tab.store
        .login(&LoginResponse { token: live_token(), user: make_user("Ana", Role::Worker) })
        .unwrap();

    assert_eq!(published.borrow().len(), before + 1);
    assert!(watcher.current().is_authenticated);
    assert_eq!(watcher.current().role(), Some(Role::Worker));
}

#[test]
fn logout_in_same_tab_clears_state() {
    let tab = Tab::first();
    tab.store
        .login(&LoginResponse { token: live_token(), user: make_user("Ana", Role::Worker) })
        .unwrap();
    let (watcher, _) = watch(&tab.store);

    tab.store.logout();

    let state = watcher.current();
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

#[test]
fn individual_setters_are_tracked() {
    let tab = Tab::first();
    let (watcher, _) = watch(&tab.store);

    tab.store.set_token(&live_token());
    assert!(watcher.current().is_authenticated);
    assert!(watcher.current().user.is_none());

    tab.store.set_user(&make_user("Ana", Role::Admin));
    assert_eq!(watcher.current().user.map(|u| u.name), Some("Ana".to_owned()));
}

#[test]
fn redundant_signals_do_not_republish() {
    let tab = Tab::first();
    let (_watcher, published) = watch(&tab.store);
    let before = published.borrow().len();

    tab.store.bus().emit(AuthEvent::AuthChanged);
    tab.store.bus().emit(AuthEvent::Login);
    tab.store.bus().emit(AuthEvent::Logout);

    assert_eq!(published.borrow().len(), before);
}

// =============================================================
// Cross-tab updates
// =============================================================

#[test]
fn user_written_in_other_tab_is_picked_up_without_call_in_this_tab() {
    let tab_a = Tab::first();
    let tab_b = tab_a.sibling();
    let (watcher_b, _) = watch(&tab_b.store);

    tab_a.store.set_user(&make_user("X", Role::Customer));

    assert_eq!(watcher_b.current().user.map(|u| u.name), Some("X".to_owned()));
}

#[test]
fn login_in_other_tab_authenticates_this_tab() {
    let tab_a = Tab::first();
    let tab_b = tab_a.sibling();
    let (watcher_b, _) = watch(&tab_b.store);

    tab_a
        .store
        .login(&LoginResponse { token: live_token(), user: make_user("Ana", Role::Admin) })
        .unwrap();

    let state = watcher_b.current();
    assert!(state.is_authenticated);
    assert_eq!(state.role(), Some(Role::Admin));
}

#[test]
fn logout_in_other_tab_signs_this_tab_out() {
    let tab_a = Tab::first();
    let tab_b = tab_a.sibling();
    tab_a
        .store
        .login(&LoginResponse { token: live_token(), user: make_user("Ana", Role::Admin) })
        .unwrap();
    let (watcher_b, _) = watch(&tab_b.store);
    assert!(watcher_b.current().is_authenticated);

    tab_a.store.logout();

    assert!(!watcher_b.current().is_authenticated);
    assert!(watcher_b.current().user.is_none());
}

#[test]
fn unrelated_keys_from_other_tab_are_ignored() {
    let tab_a = Tab::first();
    let tab_b = tab_a.sibling();
    let (_watcher_b, published) = watch(&tab_b.store);
    let before = published.borrow().len();

    tab_a.storage.set_item("theme", "dark").unwrap();

    assert_eq!(published.borrow().len(), before);
}

#[test]
fn malformed_user_from_other_tab_reads_as_signed_out_user() {
    let tab_a = Tab::first();
    let tab_b = tab_a.sibling();
    tab_a.store.set_user(&make_user("Ana", Role::Customer));
    let (watcher_b, _) = watch(&tab_b.store);

    tab_a.storage.set_item("user", "{broken").unwrap();

    assert!(watcher_b.current().user.is_none());
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn dropping_watcher_removes_all_listeners() {
    let tab = Tab::first();
    let (watcher, _) = watch(&tab.store);
    assert_eq!(tab.store.bus().listener_count(), 3);
    assert_eq!(tab.storage.external_listener_count(), 1);

    drop(watcher);

    assert_eq!(tab.store.bus().listener_count(), 0);
    assert_eq!(tab.storage.external_listener_count(), 0);
}

#[test]
fn dropped_watcher_stops_publishing() {
    let tab_a = Tab::first();
    let tab_b = tab_a.sibling();
    let (watcher_b, published) = watch(&tab_b.store);
    drop(watcher_b);
    let before = published.borrow().len();

    tab_a.store.set_user(&make_user("X", Role::Customer));
    tab_b.store.set_token(&live_token());

    assert_eq!(published.borrow().len(), before);
}

#[test]
fn remounting_does_not_accumulate_listeners() {
    let tab = Tab::first();
    for _ in 0..5 {
        let (watcher, _) = watch(&tab.store);
        drop(watcher);
    }
    let (_watcher, _) = watch(&tab.store);
    assert_eq!(tab.store.bus().listener_count(), 3);
    assert_eq!(tab.storage.external_listener_count(), 1);
}
