//! Origin-scoped key/value storage backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in `localStorage`, which is shared by every tab of the
//! origin. Writes are last-writer-wins with no locking. The browser fires a
//! `storage` event in every *other* tab after a write that changed a value,
//! never in the writing tab itself; `subscribe_external` exposes exactly that
//! signal.
//!
//! `MemoryStorage` reproduces those semantics in-process so tabs can be
//! simulated natively. `BrowserStorage` is the `hydrate` implementation over
//! `web_sys::Storage`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::subscription::Subscription;

/// Failure of the underlying storage area.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or the window has none (private mode, SSR).
    #[error("local storage is unavailable")]
    Unavailable,
    /// The write was rejected, e.g. quota exceeded.
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// A change made by another tab. `key` is `None` when the whole area was
/// cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    pub key: Option<String>,
}

/// Listener for external changes.
pub type ExternalListener = Rc<dyn Fn(&StorageChange)>;

/// String key/value storage shared by all tabs of an origin.
pub trait StorageBackend {
    /// Read `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the storage area cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `key`. A failed write leaves the previous value in place.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the area is unavailable or rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the storage area cannot be reached.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Call `listener` whenever *another* tab changes the storage area.
    fn subscribe_external(&self, listener: ExternalListener) -> Subscription;
}

// =============================================================================
// IN-MEMORY ORIGIN
// =============================================================================

struct TabListener {
    id: u64,
    tab: u64,
    listener: ExternalListener,
}

#[derive(Default)]
struct Origin {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
    next_tab: u64,
    next_listener: u64,
    listeners: Vec<TabListener>,
}

impl Origin {
    fn used_bytes_with(&self, key: &str, value: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum::<usize>()
            + key.len()
            + value.len()
    }
}

/// One tab's view of an in-memory origin.
///
/// [`MemoryStorage::open_tab`] returns a handle for another tab on the same
/// origin: both see the same entries, and each is notified only of the
/// other's writes. External listeners run synchronously inside the writing
/// call, after the write has landed.
#[derive(Clone)]
pub struct MemoryStorage {
    origin: Rc<RefCell<Origin>>,
    tab: u64,
}

impl MemoryStorage {
    /// A fresh origin with a single tab.
    #[must_use]
    pub fn new() -> Self {
        let origin = Rc::new(RefCell::new(Origin::default()));
        Self::attach(origin)
    }

    fn attach(origin: Rc<RefCell<Origin>>) -> Self {
        let tab = {
            let mut o = origin.borrow_mut();
            o.next_tab += 1;
            o.next_tab
        };
        Self { origin, tab }
    }

    /// Another tab sharing this origin's storage.
    #[must_use]
    pub fn open_tab(&self) -> Self {
        Self::attach(Rc::clone(&self.origin))
    }

    /// Cap the total size of keys plus values; writes past it fail.
    pub fn set_quota(&self, bytes: Option<usize>) {
        self.origin.borrow_mut().quota_bytes = bytes;
    }

    /// Number of external listeners registered by this tab.
    #[must_use]
    pub fn external_listener_count(&self) -> usize {
        self.origin
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.tab == self.tab)
            .count()
    }

    fn notify_other_tabs(&self, key: &str) {
        let listeners: Vec<ExternalListener> = self
            .origin
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.tab != self.tab)
            .map(|l| Rc::clone(&l.listener))
            .collect();

        let change = StorageChange { key: Some(key.to_owned()) };
        for listener in listeners {
            listener(&change);
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.origin.borrow().entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let changed = {
            let mut origin = self.origin.borrow_mut();
            if let Some(quota) = origin.quota_bytes {
                if origin.used_bytes_with(key, value) > quota {
                    return Err(StorageError::Write {
                        key: key.to_owned(),
                        reason: "quota exceeded".to_owned(),
                    });
                }
            }
            origin.entries.insert(key.to_owned(), value.to_owned()).as_deref() != Some(value)
        };
        if changed {
            self.notify_other_tabs(key);
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let removed = self.origin.borrow_mut().entries.remove(key).is_some();
        if removed {
            self.notify_other_tabs(key);
        }
        Ok(())
    }

    fn subscribe_external(&self, listener: ExternalListener) -> Subscription {
        let id = {
            let mut origin = self.origin.borrow_mut();
            origin.next_listener += 1;
            let id = origin.next_listener;
            origin.listeners.push(TabListener { id, tab: self.tab, listener });
            id
        };

        let origin = Rc::downgrade(&self.origin);
        Subscription::new(move || {
            if let Some(origin) = origin.upgrade() {
                origin.borrow_mut().listeners.retain(|l| l.id != id);
            }
        })
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.localStorage`, with the `storage` window event as the external
/// change signal.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn area() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::area()?.get_item(key).map_err(|_| StorageError::Unavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::area()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::area()?.remove_item(key).map_err(|_| StorageError::Unavailable)
    }

    fn subscribe_external(&self, listener: ExternalListener) -> Subscription {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return Subscription::noop();
        };
        let callback = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
            listener(&StorageChange { key: ev.key() });
        });
        if window
            .add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("[session] could not listen for storage events");
            return Subscription::noop();
        }

        Subscription::new(move || {
            let _ = window.remove_event_listener_with_callback("storage", callback.as_ref().unchecked_ref());
        })
    }
}
