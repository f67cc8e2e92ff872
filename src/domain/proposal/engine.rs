//! Proposal engine - creation, voting, and execution.
//!
//! Ids are allocated sequentially from 1 and never reused. Voting is open to
//! every active member; execution is reserved to the President and requires a
//! strict yes-majority plus the configured participation quorum.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, ProposalId, Timestamp, ValidationError};
use crate::domain::governance::{GovernanceError, GovernanceEvent};
use crate::domain::membership::{MembershipRegistry, Role};

use super::{ParticipationQuorum, Proposal, ProposalType};

/// Proposal table keyed by sequential id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalEngine {
    proposals: BTreeMap<ProposalId, Proposal>,
    next_id: ProposalId,
}

impl Default for ProposalEngine {
    fn default() -> Self {
        Self {
            proposals: BTreeMap::new(),
            next_id: ProposalId::FIRST,
        }
    }
}

impl ProposalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a proposal with the next sequential id.
    ///
    /// `duration_secs` sets the end of the voting window relative to `now`.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the caller is not an active member
    /// - `Validation` if the end of the voting window overflows
    pub fn create(
        &mut self,
        registry: &MembershipRegistry,
        caller: &MemberId,
        description: String,
        proposal_type: ProposalType,
        duration_secs: u64,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        registry.require_active(caller, "create proposals")?;

        let voting_ends_at = now.checked_plus_secs(duration_secs).ok_or_else(|| {
            ValidationError::invalid_format("duration", "voting window end is not representable")
        })?;

        let id = self.next_id;
        let proposal = Proposal::open(
            id,
            description.clone(),
            proposal_type,
            caller.clone(),
            now,
            voting_ends_at,
        );
        self.proposals.insert(id, proposal);
        self.next_id = id.next();

        Ok(GovernanceEvent::ProposalCreated {
            proposal_id: id,
            description,
            proposal_type,
            creator: caller.clone(),
            occurred_at: now,
        })
    }

    /// Records a yes/no vote.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `NotFound` for an unknown id
    /// - `Unauthorized` if the caller is not an active member
    /// - `AlreadyExists` if the caller already voted on this proposal
    /// - `InvalidState` if the proposal was executed, or the voting window
    ///   closed while `enforce_window` is set
    pub fn vote(
        &mut self,
        registry: &MembershipRegistry,
        caller: &MemberId,
        id: ProposalId,
        support: bool,
        enforce_window: bool,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or_else(|| GovernanceError::not_found("proposal", id))?;

        registry.require_active(caller, "vote on proposals")?;

        if proposal.has_voted(caller) {
            return Err(GovernanceError::already_exists(
                "vote",
                format!("{} on proposal {}", caller, id),
            ));
        }
        if proposal.executed {
            return Err(GovernanceError::invalid_state(
                "vote on proposal",
                format!("proposal {} was already executed", id),
            ));
        }
        if enforce_window && proposal.voting_window_closed(now) {
            return Err(GovernanceError::invalid_state(
                "vote on proposal",
                format!("voting on proposal {} closed at {}", id, proposal.voting_ends_at),
            ));
        }

        proposal.record_vote(caller.clone(), support);

        Ok(GovernanceEvent::VoteCast {
            voter: caller.clone(),
            proposal_id: id,
            support,
            occurred_at: now,
        })
    }

    /// Marks a passing proposal as executed.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` unless the caller is the active President
    /// - `NotFound` for an unknown id
    /// - `InvalidState` if already executed
    /// - `InsufficientApprovals` unless yes > no and the quorum is met
    pub fn execute(
        &mut self,
        registry: &MembershipRegistry,
        caller: &MemberId,
        id: ProposalId,
        quorum: ParticipationQuorum,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        registry.require_role(caller, Role::President, "execute proposals")?;

        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or_else(|| GovernanceError::not_found("proposal", id))?;

        if proposal.executed {
            return Err(GovernanceError::invalid_state(
                "execute proposal",
                format!("proposal {} was already executed", id),
            ));
        }
        if proposal.yes_count <= proposal.no_count {
            return Err(GovernanceError::insufficient_approvals(
                format!("proposal {}", id),
                format!(
                    "{} yes vs {} no; yes must strictly exceed no",
                    proposal.yes_count, proposal.no_count
                ),
            ));
        }
        let required = quorum.required_votes(registry.active_member_count());
        if proposal.votes_cast() < required {
            return Err(GovernanceError::insufficient_approvals(
                format!("proposal {}", id),
                format!(
                    "{} votes cast, quorum requires {} ({})",
                    proposal.votes_cast(),
                    required,
                    quorum
                ),
            ));
        }

        proposal.mark_executed();

        Ok(GovernanceEvent::ProposalExecuted {
            proposal_id: id,
            occurred_at: now,
        })
    }

    pub fn proposal(&self, id: ProposalId) -> Result<&Proposal, GovernanceError> {
        self.proposals
            .get(&id)
            .ok_or_else(|| GovernanceError::not_found("proposal", id))
    }

    /// Number of proposals ever created.
    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    pub fn proposals(&self) -> impl Iterator<Item = &Proposal> {
        self.proposals.values()
    }
}
