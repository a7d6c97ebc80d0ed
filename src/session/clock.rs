//! Time source for token expiry checks.
//!
//! Expiry is evaluated against the evaluating tab's own clock. Tests swap in
//! [`FixedClock`] to pin "now".

use std::cell::Cell;
use std::fmt::Debug;

/// Wall-clock time in milliseconds since the Unix epoch.
pub trait Clock: Debug {
    fn now_millis(&self) -> i64;
}

/// The browser clock (`Date.now()`) under `hydrate`, `SystemTime` elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_millis(&self) -> i64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now() as i64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        }
    }
}

/// Manually driven clock.
#[derive(Debug, Default)]
pub struct FixedClock {
    millis: Cell<i64>,
}

impl FixedClock {
    #[must_use]
    pub fn new(millis: i64) -> Self {
        Self { millis: Cell::new(millis) }
    }

    pub fn set(&self, millis: i64) {
        self.millis.set(millis);
    }

    pub fn advance(&self, millis: i64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }
}
