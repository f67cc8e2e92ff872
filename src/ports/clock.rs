//! Clock port - Source of the current time.
//!
//! Every governance operation reads the clock exactly once and uses that
//! instant for deadlines and event timestamps.

use crate::domain::foundation::Timestamp;

/// Port for reading the current time.
///
/// Tests and simulations inject a controllable clock instead of the
/// system clock so election deadlines can be crossed deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Timestamp);

    impl Clock for Fixed {
        fn now(&self) -> Timestamp {
            self.0
        }
    }

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn Clock) {}

    #[test]
    fn clock_can_be_used_as_trait_object() {
        let clock: Box<dyn Clock> = Box::new(Fixed(Timestamp::from_unix_secs(42)));
        assert_eq!(clock.now().as_unix_secs(), 42);
    }
}
