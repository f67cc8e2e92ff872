//! Manually driven clock for tests and simulations.

use std::sync::RwLock;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// A clock that only moves when told to.
///
/// # Panics
///
/// Methods may panic if the internal lock is poisoned. Intended for tests
/// and simulations, not for production wiring.
///
/// # Example
///
/// ```ignore
/// let clock = Arc::new(ManualClock::at_unix_secs(0));
/// start.handle(StartElectionCommand { duration_secs: 86_400 }, meta.clone()).await?;
/// clock.advance_secs(86_400);
/// end.handle(EndElectionCommand, meta).await?;
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    pub fn at_unix_secs(secs: i64) -> Self {
        Self::new(Timestamp::from_unix_secs(secs))
    }

    /// Jumps to an absolute instant.
    pub fn set(&self, to: Timestamp) {
        *self.now.write().expect("ManualClock: lock poisoned") = to;
    }

    /// Moves the clock forward by `secs` seconds, stopping at the latest
    /// representable instant.
    pub fn advance_secs(&self, secs: u64) {
        let mut now = self.now.write().expect("ManualClock: lock poisoned");
        *now = now.saturating_plus_secs(secs);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Timestamp::epoch())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.read().expect("ManualClock: lock poisoned")
    }
}
