//! Client-side authentication session.
//!
//! ARCHITECTURE
//! ============
//! `store::SessionStore` owns the persisted token and user record and is the
//! only writer. Every successful write is followed by an emission on its
//! `events::AuthEventBus`, so same-tab readers never observe a stale value
//! after a notification. Other tabs learn about writes through the storage
//! backend's external-change signal (the browser `storage` event).
//!
//! `watcher::AuthWatcher` is the single reader that turns those signals into
//! an `AuthState` for views, and `guard` maps that state to a routing
//! decision.
//!
//! TRADE-OFFS
//! ==========
//! Signals carry no payload that readers trust. Every notification, local or
//! cross-tab, triggers a full re-read of storage, which keeps the mechanism
//! correct even though cross-tab delivery is unordered and best-effort.

pub mod clock;
pub mod events;
pub mod guard;
pub mod storage;
pub mod store;
pub mod subscription;
pub mod token;
pub mod watcher;

pub use clock::{Clock, FixedClock, SystemClock};
pub use events::{AuthEvent, AuthEventBus};
pub use guard::GuardDecision;
pub use storage::{MemoryStorage, StorageBackend, StorageChange, StorageError};
pub use store::SessionStore;
pub use subscription::Subscription;
pub use watcher::AuthWatcher;
