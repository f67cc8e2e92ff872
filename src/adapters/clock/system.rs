//! Wall-clock adapter.

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Reads the host's UTC clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
