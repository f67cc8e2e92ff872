//! Participation quorum for proposal execution.

use serde::{Deserialize, Serialize};

/// Minimum number of votes that must be cast before a proposal can execute.
///
/// Independent of the quorum, yes-votes must strictly exceed no-votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipationQuorum {
    /// A fixed number of votes regardless of organization size.
    Fixed { min_votes: u32 },

    /// More than half of the currently active members must have voted.
    MajorityOfActive,
}

impl ParticipationQuorum {
    /// Returns how many votes are required given the active member count.
    pub fn required_votes(&self, active_members: usize) -> u32 {
        match self {
            ParticipationQuorum::Fixed { min_votes } => *min_votes,
            ParticipationQuorum::MajorityOfActive => {
                u32::try_from(active_members / 2 + 1).unwrap_or(u32::MAX)
            }
        }
    }
}

impl Default for ParticipationQuorum {
    fn default() -> Self {
        ParticipationQuorum::Fixed { min_votes: 1 }
    }
}

impl std::fmt::Display for ParticipationQuorum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipationQuorum::Fixed { min_votes } => write!(f, "at least {} votes", min_votes),
            ParticipationQuorum::MajorityOfActive => write!(f, "majority of active members"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ignores_member_count() {
        let quorum = ParticipationQuorum::Fixed { min_votes: 3 };
        assert_eq!(quorum.required_votes(1), 3);
        assert_eq!(quorum.required_votes(100), 3);
    }

    #[test]
    fn majority_of_active_is_strict_majority() {
        let quorum = ParticipationQuorum::MajorityOfActive;
        assert_eq!(quorum.required_votes(8), 5);
        assert_eq!(quorum.required_votes(7), 4);
        assert_eq!(quorum.required_votes(1), 1);
    }

    #[test]
    fn default_is_single_vote() {
        assert_eq!(ParticipationQuorum::default().required_votes(50), 1);
    }
}
