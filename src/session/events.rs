//! Tab-local auth event bus.
//!
//! DESIGN
//! ======
//! A plain observer list owned by the session store instead of a global
//! dispatch primitive. `emit` is synchronous: every listener registered for
//! the event when `emit` is called runs, in registration order, before `emit`
//! returns. The listener list is snapshotted first, so callbacks may
//! subscribe or unsubscribe without disturbing the delivery in progress.
//!
//! Nothing here crosses tabs. Cross-tab propagation is the storage backend's
//! job (see `storage::StorageBackend::subscribe_external`).

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::subscription::Subscription;

/// Named auth transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthEvent {
    /// Fired after any write to the session.
    AuthChanged,
    /// Fired after a login has written both token and user.
    Login,
    /// Fired after a logout has cleared both token and user.
    Logout,
}

impl AuthEvent {
    pub const ALL: [AuthEvent; 3] = [Self::AuthChanged, Self::Login, Self::Logout];

    /// Event name as used by the browser build for diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AuthChanged => "authChanged",
            Self::Login => "authLogin",
            Self::Logout => "authLogout",
        }
    }
}

impl fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Listener = Rc<dyn Fn(AuthEvent)>;

struct Registration {
    id: u64,
    event: AuthEvent,
    listener: Listener,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    registrations: Vec<Registration>,
}

/// Synchronous, ordered publish/subscribe for [`AuthEvent`]s.
///
/// Cloning yields another handle to the same listener list.
#[derive(Clone, Default)]
pub struct AuthEventBus {
    inner: Rc<RefCell<Registry>>,
}

impl AuthEventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `event`. The listener stays registered until
    /// the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, event: AuthEvent, listener: impl Fn(AuthEvent) + 'static) -> Subscription {
        let id = {
            let mut registry = self.inner.borrow_mut();
            registry.next_id += 1;
            let id = registry.next_id;
            registry.registrations.push(Registration { id, event, listener: Rc::new(listener) });
            id
        };

        let registry = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().registrations.retain(|r| r.id != id);
            }
        })
    }

    /// Deliver `event` to its current listeners.
    pub fn emit(&self, event: AuthEvent) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .registrations
            .iter()
            .filter(|r| r.event == event)
            .map(|r| Rc::clone(&r.listener))
            .collect();

        for listener in listeners {
            listener(event);
        }
    }

    /// Number of registered listeners across all events.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().registrations.len()
    }
}

impl fmt::Debug for AuthEventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthEventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
