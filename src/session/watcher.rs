//! Auth state watcher: keeps an `AuthState` in step with the session.
//!
//! DESIGN
//! ======
//! Activation publishes `loading = true`, reads the store, and publishes the
//! loaded state. After that the watcher re-reads the store on every
//! `AuthChanged`, `Login` and `Logout` emission in this tab and on every
//! external storage change from another tab. The trigger itself is never
//! trusted; only the re-read is.
//!
//! Re-reads are idempotent and a state equal to the last published one is
//! not published again, so one write reaching the watcher through several
//! signals produces a single update.
//!
//! Dropping the watcher drops its subscriptions.

#[cfg(test)]
#[path = "watcher_test.rs"]
mod watcher_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::events::AuthEvent;
use super::storage::StorageChange;
use super::store::SessionStore;
use super::subscription::Subscription;
use crate::state::auth::AuthState;

type Publisher = Rc<dyn Fn(&AuthState)>;

/// Live subscription of one consumer to the session.
pub struct AuthWatcher {
    current: Rc<RefCell<AuthState>>,
    subscriptions: Vec<Subscription>,
}

impl AuthWatcher {
    /// Start watching `store`, handing every new state to `publish`.
    pub fn activate(store: SessionStore, publish: impl Fn(&AuthState) + 'static) -> Self {
        let publish: Publisher = Rc::new(publish);
        let initial = AuthState::loading();
        publish(&initial);
        let current = Rc::new(RefCell::new(initial));

        let refresh = {
            let store = store.clone();
            let current = Rc::clone(&current);
            let publish = Rc::clone(&publish);
            Rc::new(move || {
                let next = store.snapshot();
                let changed = {
                    let mut current = current.borrow_mut();
                    if *current == next {
                        false
                    } else {
                        *current = next.clone();
                        true
                    }
                };
                if changed {
                    publish(&next);
                }
            })
        };

        refresh();

        let mut subscriptions: Vec<Subscription> = AuthEvent::ALL
            .into_iter()
            .map(|event| {
                let refresh = Rc::clone(&refresh);
                store.bus().subscribe(event, move |_| refresh())
            })
            .collect();

        subscriptions.push(store.subscribe_external(Rc::new(move |change: &StorageChange| {
            if SessionStore::affects_session(change) {
                refresh();
            }
        })));

        Self { current, subscriptions }
    }

    /// The most recently published state.
    #[must_use]
    pub fn current(&self) -> AuthState {
        self.current.borrow().clone()
    }
}

impl fmt::Debug for AuthWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthWatcher")
            .field("current", &*self.current.borrow())
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
