//! Governance domain events.
//!
//! Exactly one event is emitted per successful mutating operation. Events are
//! named in past tense and carry the identities/ids the host needs to react;
//! `CandidateVoted` deliberately carries the candidate index rather than the
//! candidate identity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainEvent, MemberId, ProposalId, Timestamp};
use crate::domain::membership::Role;
use crate::domain::proposal::ProposalType;

/// Events that occur as the governance ledger changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GovernanceEvent {
    /// A new identity joined as a Member.
    MemberAdded {
        identity: MemberId,
        occurred_at: Timestamp,
    },

    /// A member was tombstoned.
    MemberRemoved {
        identity: MemberId,
        removed_by: MemberId,
        occurred_at: Timestamp,
    },

    /// A Member applied for promotion.
    PromotionInitiated {
        candidate: MemberId,
        target_role: Role,
        /// Numeric code of `target_role` (Member=0, Executive=1, President=2).
        role_code: u8,
        occurred_at: Timestamp,
    },

    /// An approval was recorded without reaching the threshold.
    PromotionApprovalRecorded {
        candidate: MemberId,
        approver: MemberId,
        approval_count: u32,
        occurred_at: Timestamp,
    },

    /// The threshold was met and the candidate became Executive.
    PromotionApproved {
        candidate: MemberId,
        occurred_at: Timestamp,
    },

    ProposalCreated {
        proposal_id: ProposalId,
        description: String,
        proposal_type: ProposalType,
        creator: MemberId,
        occurred_at: Timestamp,
    },

    VoteCast {
        voter: MemberId,
        proposal_id: ProposalId,
        support: bool,
        occurred_at: Timestamp,
    },

    ProposalExecuted {
        proposal_id: ProposalId,
        occurred_at: Timestamp,
    },

    ElectionStarted {
        end_time: Timestamp,
        occurred_at: Timestamp,
    },

    CandidateNominated {
        candidate: MemberId,
        occurred_at: Timestamp,
    },

    CandidateVoted {
        candidate_index: usize,
        occurred_at: Timestamp,
    },

    /// The election closed and `winner` now holds the presidency.
    ElectionEnded {
        winner: MemberId,
        occurred_at: Timestamp,
    },
}

impl DomainEvent for GovernanceEvent {
    fn event_type(&self) -> &'static str {
        match self {
            GovernanceEvent::MemberAdded { .. } => "governance.member_added.v1",
            GovernanceEvent::MemberRemoved { .. } => "governance.member_removed.v1",
            GovernanceEvent::PromotionInitiated { .. } => "governance.promotion_initiated.v1",
            GovernanceEvent::PromotionApprovalRecorded { .. } => {
                "governance.promotion_approval_recorded.v1"
            }
            GovernanceEvent::PromotionApproved { .. } => "governance.promotion_approved.v1",
            GovernanceEvent::ProposalCreated { .. } => "governance.proposal_created.v1",
            GovernanceEvent::VoteCast { .. } => "governance.vote_cast.v1",
            GovernanceEvent::ProposalExecuted { .. } => "governance.proposal_executed.v1",
            GovernanceEvent::ElectionStarted { .. } => "governance.election_started.v1",
            GovernanceEvent::CandidateNominated { .. } => "governance.candidate_nominated.v1",
            GovernanceEvent::CandidateVoted { .. } => "governance.candidate_voted.v1",
            GovernanceEvent::ElectionEnded { .. } => "governance.election_ended.v1",
        }
    }

    fn schema_version(&self) -> u32 {
        1
    }

    fn aggregate_id(&self) -> String {
        match self {
            GovernanceEvent::MemberAdded { identity, .. }
            | GovernanceEvent::MemberRemoved { identity, .. } => identity.to_string(),
            GovernanceEvent::PromotionInitiated { candidate, .. }
            | GovernanceEvent::PromotionApprovalRecorded { candidate, .. }
            | GovernanceEvent::PromotionApproved { candidate, .. } => candidate.to_string(),
            GovernanceEvent::ProposalCreated { proposal_id, .. }
            | GovernanceEvent::VoteCast { proposal_id, .. }
            | GovernanceEvent::ProposalExecuted { proposal_id, .. } => proposal_id.to_string(),
            GovernanceEvent::ElectionStarted { .. }
            | GovernanceEvent::CandidateNominated { .. }
            | GovernanceEvent::CandidateVoted { .. }
            | GovernanceEvent::ElectionEnded { .. } => "election".to_string(),
        }
    }

    fn aggregate_type(&self) -> &'static str {
        match self {
            GovernanceEvent::MemberAdded { .. } | GovernanceEvent::MemberRemoved { .. } => {
                "Member"
            }
            GovernanceEvent::PromotionInitiated { .. }
            | GovernanceEvent::PromotionApprovalRecorded { .. }
            | GovernanceEvent::PromotionApproved { .. } => "PromotionRequest",
            GovernanceEvent::ProposalCreated { .. }
            | GovernanceEvent::VoteCast { .. }
            | GovernanceEvent::ProposalExecuted { .. } => "Proposal",
            GovernanceEvent::ElectionStarted { .. }
            | GovernanceEvent::CandidateNominated { .. }
            | GovernanceEvent::CandidateVoted { .. }
            | GovernanceEvent::ElectionEnded { .. } => "Election",
        }
    }

    fn occurred_at(&self) -> Timestamp {
        match self {
            GovernanceEvent::MemberAdded { occurred_at, .. }
            | GovernanceEvent::MemberRemoved { occurred_at, .. }
            | GovernanceEvent::PromotionInitiated { occurred_at, .. }
            | GovernanceEvent::PromotionApprovalRecorded { occurred_at, .. }
            | GovernanceEvent::PromotionApproved { occurred_at, .. }
            | GovernanceEvent::ProposalCreated { occurred_at, .. }
            | GovernanceEvent::VoteCast { occurred_at, .. }
            | GovernanceEvent::ProposalExecuted { occurred_at, .. }
            | GovernanceEvent::ElectionStarted { occurred_at, .. }
            | GovernanceEvent::CandidateNominated { occurred_at, .. }
            | GovernanceEvent::CandidateVoted { occurred_at, .. }
            | GovernanceEvent::ElectionEnded { occurred_at, .. } => *occurred_at,
        }
    }
}
