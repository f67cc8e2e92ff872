//! Tunable governance rules.

use serde::{Deserialize, Serialize};

use crate::domain::election::TieBreak;
use crate::domain::foundation::ValidationError;
use crate::domain::proposal::ParticipationQuorum;

/// Rules the ledger applies on top of the fixed role model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernancePolicy {
    /// Distinct approvals needed to promote a Member to Executive.
    pub promotion_approval_threshold: u32,
    /// Minimum participation before a proposal can execute.
    pub participation_quorum: ParticipationQuorum,
    /// How equal top tallies are resolved when an election ends.
    pub tie_break: TieBreak,
    /// Reject proposal votes cast after the proposal's voting window.
    pub enforce_proposal_voting_window: bool,
}

impl GovernancePolicy {
    pub const DEFAULT_PROMOTION_APPROVAL_THRESHOLD: u32 = 1;

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.promotion_approval_threshold == 0 {
            return Err(ValidationError::out_of_range(
                "promotion_approval_threshold",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        if let ParticipationQuorum::Fixed { min_votes: 0 } = self.participation_quorum {
            return Err(ValidationError::out_of_range(
                "participation_quorum.min_votes",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }
        Ok(())
    }
}

impl Default for GovernancePolicy {
    fn default() -> Self {
        Self {
            promotion_approval_threshold: Self::DEFAULT_PROMOTION_APPROVAL_THRESHOLD,
            participation_quorum: ParticipationQuorum::default(),
            tie_break: TieBreak::default(),
            enforce_proposal_voting_window: false,
        }
    }
}
