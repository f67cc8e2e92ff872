//! Governance policy configuration

use serde::Deserialize;

use crate::domain::election::TieBreak;
use crate::domain::foundation::MemberId;
use crate::domain::governance::GovernancePolicy;
use crate::domain::proposal::ParticipationQuorum;

use super::error::ValidationError;

/// Governance configuration
///
/// Mirrors [`GovernancePolicy`] with flat, environment-friendly fields.
#[derive(Debug, Clone, Deserialize)]
pub struct GovernanceConfig {
    /// Identity of the founding President, used when no ledger exists yet
    pub founder: Option<String>,

    /// Executive approvals required before a promotion applies
    #[serde(default = "default_promotion_approval_threshold")]
    pub promotion_approval_threshold: u32,

    /// How proposal execution quorum is computed
    #[serde(default)]
    pub quorum_mode: QuorumMode,

    /// Minimum votes when `quorum_mode` is `fixed`
    #[serde(default = "default_quorum_min_votes")]
    pub quorum_min_votes: u32,

    /// How ties between candidates are resolved at election end
    #[serde(default)]
    pub tie_break: TieBreak,

    /// Reject proposal votes once the voting window has closed
    #[serde(default)]
    pub enforce_proposal_voting_window: bool,
}

/// Proposal quorum mode
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuorumMode {
    #[default]
    Fixed,
    MajorityOfActive,
}

impl GovernanceConfig {
    /// Build the domain policy from the configured values
    pub fn policy(&self) -> GovernancePolicy {
        let participation_quorum = match self.quorum_mode {
            QuorumMode::Fixed => ParticipationQuorum::Fixed {
                min_votes: self.quorum_min_votes,
            },
            QuorumMode::MajorityOfActive => ParticipationQuorum::MajorityOfActive,
        };

        GovernancePolicy {
            promotion_approval_threshold: self.promotion_approval_threshold,
            participation_quorum,
            tie_break: self.tie_break,
            enforce_proposal_voting_window: self.enforce_proposal_voting_window,
        }
    }

    /// Parse the configured founder identity
    pub fn founder_id(&self) -> Result<MemberId, ValidationError> {
        let raw = self
            .founder
            .as_deref()
            .ok_or(ValidationError::MissingRequired("governance.founder"))?;
        MemberId::new(raw).map_err(|e| ValidationError::InvalidFounder(e.to_string()))
    }

    /// Validate governance configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.founder_id()?;
        if self.promotion_approval_threshold == 0 {
            return Err(ValidationError::InvalidPromotionThreshold);
        }
        if self.quorum_mode == QuorumMode::Fixed && self.quorum_min_votes == 0 {
            return Err(ValidationError::InvalidQuorum);
        }
        Ok(())
    }
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            founder: None,
            promotion_approval_threshold: default_promotion_approval_threshold(),
            quorum_mode: QuorumMode::default(),
            quorum_min_votes: default_quorum_min_votes(),
            tie_break: TieBreak::default(),
            enforce_proposal_voting_window: false,
        }
    }
}

fn default_promotion_approval_threshold() -> u32 {
    GovernancePolicy::DEFAULT_PROMOTION_APPROVAL_THRESHOLD
}

fn default_quorum_min_votes() -> u32 {
    1
}
