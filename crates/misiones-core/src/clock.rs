//! Clock abstraction for determinism.

use chrono::{DateTime, Utc};

/// Source of the current time. Banner deadlines and feed timestamps read it
/// through this trait so tests can pin the time.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
