//! Token/user store: the tab's only writer of the persisted session.
//!
//! DESIGN
//! ======
//! Two independent entries, `token` and `user`, in origin-scoped storage.
//! Every mutating call persists first and emits on the event bus second, so
//! any listener reads the value that was just written.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here raises. Unreadable storage, malformed user JSON and rejected
//! writes are logged and degrade to "no session" (reads) or "nothing changed"
//! (writes). A write that did not land emits no notification.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;
use std::rc::Rc;

use super::clock::{Clock, SystemClock};
use super::events::{AuthEvent, AuthEventBus};
use super::storage::{ExternalListener, StorageBackend, StorageChange, StorageError};
use super::subscription::Subscription;
use super::token;
use crate::net::types::{LoginResponse, User};
use crate::state::auth::AuthState;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the JSON user record.
pub const USER_KEY: &str = "user";

/// The persisted session of one tab, plus that tab's event bus.
///
/// Cloning yields another handle to the same storage and bus.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn StorageBackend>,
    clock: Rc<dyn Clock>,
    bus: AuthEventBus,
    server_side: bool,
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Rc<dyn StorageBackend>, clock: Rc<dyn Clock>) -> Self {
        Self { storage, clock, bus: AuthEventBus::new(), server_side: false }
    }

    /// Session over `window.localStorage` and the browser clock.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Rc::new(super::storage::BrowserStorage), Rc::new(SystemClock))
    }

    /// Placeholder session for server rendering.
    ///
    /// The server cannot see the visitor's browser storage, so it does not
    /// know whether anyone is signed in. The store is backed by a private
    /// in-memory origin and reports itself as [`server_side`](Self::server_side),
    /// which keeps consumers in the loading state until the browser takes over.
    #[must_use]
    pub fn server_placeholder() -> Self {
        Self {
            server_side: true,
            ..Self::new(Rc::new(super::storage::MemoryStorage::new()), Rc::new(SystemClock))
        }
    }

    /// The session for the running environment.
    #[must_use]
    pub fn for_environment() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::browser()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::server_placeholder()
        }
    }

    /// Whether this is the server-rendering placeholder, whose contents say
    /// nothing about the visitor's real session.
    #[must_use]
    pub fn server_side(&self) -> bool {
        self.server_side
    }

    /// This tab's auth event bus.
    #[must_use]
    pub fn bus(&self) -> &AuthEventBus {
        &self.bus
    }

    /// Listen for session changes made by other tabs.
    pub fn subscribe_external(&self, listener: ExternalListener) -> Subscription {
        self.storage.subscribe_external(listener)
    }

    /// Whether an external change may have touched the session. A cleared
    /// storage area (`key: None`) always does.
    #[must_use]
    pub fn affects_session(change: &StorageChange) -> bool {
        change
            .key
            .as_deref()
            .is_none_or(|key| key == TOKEN_KEY || key == USER_KEY)
    }

    // =========================================================================
    // READS
    // =========================================================================

    #[must_use]
    pub fn get_token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    /// The stored user, or `None` when absent or not valid user JSON.
    #[must_use]
    pub fn get_user(&self) -> Option<User> {
        let raw = self.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                leptos::logging::error!("[session] error parsing user data: {e}");
                None
            }
        }
    }

    /// A token is stored and its expiry claim lies strictly in the future.
    /// Undecodable tokens count as unauthenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.get_token()
            .is_some_and(|t| token::is_live(&t, self.clock.now_millis()))
    }

    /// `Authorization` header value for API calls.
    #[must_use]
    pub fn auth_header(&self) -> Option<String> {
        self.get_token().map(|t| format!("Bearer {t}"))
    }

    /// One consistent read of the whole session.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        AuthState {
            user: self.get_user(),
            is_authenticated: self.is_authenticated(),
            loading: false,
        }
    }

    // =========================================================================
    // WRITES
    // =========================================================================

    pub fn set_token(&self, token: &str) {
        if self.write(TOKEN_KEY, token).is_ok() {
            self.bus.emit(AuthEvent::AuthChanged);
        }
    }

    /// Persist `user`. On failure the previously stored user stays in place.
    pub fn set_user(&self, user: &User) {
        if self.write_user(user).is_ok() {
            self.bus.emit(AuthEvent::AuthChanged);
        }
    }

    pub fn remove_token(&self) {
        if self.delete(TOKEN_KEY).is_ok() {
            self.bus.emit(AuthEvent::AuthChanged);
        }
    }

    pub fn remove_user(&self) {
        if self.delete(USER_KEY).is_ok() {
            self.bus.emit(AuthEvent::AuthChanged);
        }
    }

    /// Persist a fresh session, then emit `AuthChanged` followed by `Login`.
    ///
    /// Token and user land together or not at all: if the user cannot be
    /// stored, the token written just before is removed again and no event
    /// is emitted.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] of the write that failed.
    pub fn login(&self, session: &LoginResponse) -> Result<(), StorageError> {
        self.write(TOKEN_KEY, &session.token)?;
        if let Err(e) = self.write_user(&session.user) {
            let _ = self.delete(TOKEN_KEY);
            return Err(e);
        }
        self.bus.emit(AuthEvent::AuthChanged);
        self.bus.emit(AuthEvent::Login);
        Ok(())
    }

    /// Clear token and user, then emit `AuthChanged` followed by `Logout`.
    ///
    /// Both deletes are attempted. Nothing is emitted when neither landed.
    pub fn logout(&self) {
        let token_removed = self.delete(TOKEN_KEY).is_ok();
        let user_removed = self.delete(USER_KEY).is_ok();
        if token_removed || user_removed {
            self.bus.emit(AuthEvent::AuthChanged);
            self.bus.emit(AuthEvent::Logout);
        }
    }

    // =========================================================================
    // STORAGE ACCESS
    // =========================================================================

    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).unwrap_or_else(|e| {
            leptos::logging::warn!("[session] error reading {key}: {e}");
            None
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).inspect_err(|e| {
            leptos::logging::error!("[session] error storing {key}: {e}");
        })
    }

    fn write_user(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user).map_err(|e| {
            leptos::logging::error!("[session] error serializing user data: {e}");
            StorageError::Write { key: USER_KEY.to_owned(), reason: e.to_string() }
        })?;
        self.write(USER_KEY, &raw)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).inspect_err(|e| {
            leptos::logging::error!("[session] error removing {key}: {e}");
        })
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("clock", &self.clock)
            .field("bus", &self.bus)
            .field("server_side", &self.server_side)
            .finish_non_exhaustive()
    }
}
