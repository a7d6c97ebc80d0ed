//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The signal is fed by a
//! `session::AuthWatcher`, which keeps it in step with same-tab writes and
//! with writes made in other tabs.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::{Role, User};
use crate::session::{AuthWatcher, SessionStore};

/// Authentication state as seen by views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// Stored user record. May be present without a valid token for a stale
    /// instant; never use it for authorization on its own.
    pub user: Option<User>,
    /// A token is stored and its expiry lies in the future.
    pub is_authenticated: bool,
    /// The initial read from storage has not completed yet.
    pub loading: bool,
}

impl AuthState {
    /// The state published before the first storage read.
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// The user, but only while the session is authenticated.
    #[must_use]
    pub fn signed_in_user(&self) -> Option<&User> {
        self.user.as_ref().filter(|_| self.is_authenticated)
    }

    /// Role of the signed-in user.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.signed_in_user().map(|u| u.role)
    }
}

/// Handle to the tab's session store that can live in Leptos context.
pub type SessionHandle = StoredValue<SessionStore, LocalStorage>;

/// Everything auth-aware components pull from context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: SessionHandle,
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    /// Clone of the session store for imperative writes (login, logout).
    #[must_use]
    pub fn store(&self) -> SessionStore {
        self.session.get_value()
    }

    /// API client authenticated with this session's token.
    #[must_use]
    pub fn api(&self) -> ApiClient {
        ApiClient::new(ClientConfig::default(), self.store())
    }
}

/// Drive an `AuthState` signal from `store` for as long as the current
/// reactive owner lives. The watcher's listeners are removed when the owner
/// is disposed.
///
/// A server-side placeholder store is never read: the signal stays in the
/// loading state so server-rendered markup neither redirects nor shows a
/// signed-out navbar, and hydration resolves the real session.
pub fn use_auth_state(store: SessionStore) -> RwSignal<AuthState> {
    let state = RwSignal::new(AuthState::loading());
    if store.server_side() {
        return state;
    }
    let publish = move |next: &AuthState| state.set(next.clone());

    // Hydration has to meet the same loading markup the server rendered, so
    // the first read waits for the effect pass that follows it.
    #[cfg(feature = "hydrate")]
    {
        let watcher = StoredValue::new_local(None::<AuthWatcher>);
        Effect::new(move || {
            if watcher.with_value(Option::is_none) {
                watcher.set_value(Some(AuthWatcher::activate(store.clone(), publish)));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _watcher = StoredValue::new_local(AuthWatcher::activate(store, publish));
    }
    state
}

/// Install `store` and its derived state into context for the app tree.
pub fn provide_auth_context(store: SessionStore) -> AuthContext {
    let state = use_auth_state(store.clone());
    let ctx = AuthContext { session: StoredValue::new_local(store), state };
    provide_context(ctx);
    ctx
}

/// The auth context installed by [`provide_auth_context`].
///
/// # Panics
///
/// Panics when called outside the app tree, like `expect_context`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
