//! Election phase state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle phase of the singleton election.
///
/// `Inactive -> Active` on start, `Active -> Inactive` on end. The phase is
/// stored, never derived from the clock: an election whose deadline passed
/// stays `Active` until someone ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectionPhase {
    #[default]
    Inactive,
    Active,
}

impl ElectionPhase {
    pub fn is_active(&self) -> bool {
        matches!(self, ElectionPhase::Active)
    }
}

impl StateMachine for ElectionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ElectionPhase::*;
        matches!((self, target), (Inactive, Active) | (Active, Inactive))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ElectionPhase::*;
        match self {
            Inactive => vec![Active],
            Active => vec![Inactive],
        }
    }
}

impl std::fmt::Display for ElectionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElectionPhase::Inactive => write!(f, "inactive"),
            ElectionPhase::Active => write!(f, "active"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_inactive() {
        assert_eq!(ElectionPhase::default(), ElectionPhase::Inactive);
        assert!(!ElectionPhase::default().is_active());
    }

    #[test]
    fn phases_alternate() {
        let active = ElectionPhase::Inactive
            .transition_to(ElectionPhase::Active)
            .unwrap();
        assert!(active.is_active());

        let closed = active.transition_to(ElectionPhase::Inactive).unwrap();
        assert_eq!(closed, ElectionPhase::Inactive);
    }

    #[test]
    fn self_transitions_are_rejected() {
        assert!(ElectionPhase::Active
            .transition_to(ElectionPhase::Active)
            .is_err());
        assert!(ElectionPhase::Inactive
            .transition_to(ElectionPhase::Inactive)
            .is_err());
    }

    #[test]
    fn no_phase_is_terminal() {
        assert!(!ElectionPhase::Inactive.is_terminal());
        assert!(!ElectionPhase::Active.is_terminal());
    }
}
