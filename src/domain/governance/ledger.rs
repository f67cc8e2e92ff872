//! GovernanceLedger aggregate.
//!
//! Composes the membership registry, promotion workflow, proposal engine and
//! election engine under one policy. Every mutating method validates fully
//! before touching state and returns the single event it produced.

use serde::{Deserialize, Serialize};

use crate::domain::election::{Election, ElectionEngine};
use crate::domain::foundation::{MemberId, ProposalId, Timestamp, ValidationError};
use crate::domain::membership::{Member, MembershipRegistry};
use crate::domain::promotion::{PromotionRequestView, PromotionWorkflow};
use crate::domain::proposal::{Proposal, ProposalEngine, ProposalType};

use super::{GovernanceError, GovernanceEvent, GovernancePolicy};

/// The whole governance state of one organization.
///
/// # Invariants
///
/// - Exactly one active member holds the President role
/// - Proposal ids are allocated 1, 2, 3... and never reused
/// - At most one election is active
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceLedger {
    policy: GovernancePolicy,
    members: MembershipRegistry,
    promotions: PromotionWorkflow,
    proposals: ProposalEngine,
    election: ElectionEngine,
}

impl GovernanceLedger {
    /// Founds an organization with `founder` as its sole President.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the policy is invalid.
    pub fn found(
        founder: MemberId,
        policy: GovernancePolicy,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        policy.validate()?;
        Ok(Self {
            policy,
            members: MembershipRegistry::founded_by(founder, now),
            promotions: PromotionWorkflow::new(),
            proposals: ProposalEngine::new(),
            election: ElectionEngine::new(),
        })
    }

    pub fn policy(&self) -> &GovernancePolicy {
        &self.policy
    }

    /// Replaces the policy, e.g. after a configuration reload.
    pub fn set_policy(&mut self, policy: GovernancePolicy) -> Result<(), ValidationError> {
        policy.validate()?;
        self.policy = policy;
        Ok(())
    }

    // ---- membership ----

    pub fn add_member(
        &mut self,
        identity: MemberId,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        self.members.add_member(identity, now)
    }

    pub fn remove_member(
        &mut self,
        caller: &MemberId,
        identity: &MemberId,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        self.members.remove_member(caller, identity, now)
    }

    pub fn is_member(&self, identity: &MemberId) -> bool {
        self.members.is_member(identity)
    }

    pub fn member_details(&self, identity: &MemberId) -> Result<&Member, GovernanceError> {
        self.members.member_details(identity)
    }

    pub fn registry(&self) -> &MembershipRegistry {
        &self.members
    }

    // ---- promotion ----

    pub fn initiate_promotion(
        &mut self,
        caller: &MemberId,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        self.promotions.initiate(&self.members, caller, now)
    }

    pub fn approve_promotion(
        &mut self,
        caller: &MemberId,
        candidate: &MemberId,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        self.promotions.approve(
            &mut self.members,
            caller,
            candidate,
            self.policy.promotion_approval_threshold,
            now,
        )
    }

    pub fn promotion_request(
        &self,
        candidate: &MemberId,
    ) -> Result<PromotionRequestView, GovernanceError> {
        self.promotions.request(candidate)
    }

    // ---- proposals ----

    pub fn create_proposal(
        &mut self,
        caller: &MemberId,
        description: String,
        proposal_type: ProposalType,
        duration_secs: u64,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        self.proposals.create(
            &self.members,
            caller,
            description,
            proposal_type,
            duration_secs,
            now,
        )
    }

    pub fn vote_proposal(
        &mut self,
        caller: &MemberId,
        id: ProposalId,
        support: bool,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        self.proposals.vote(
            &self.members,
            caller,
            id,
            support,
            self.policy.enforce_proposal_voting_window,
            now,
        )
    }

    pub fn execute_proposal(
        &mut self,
        caller: &MemberId,
        id: ProposalId,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        self.proposals.execute(
            &self.members,
            caller,
            id,
            self.policy.participation_quorum,
            now,
        )
    }

    pub fn proposal(&self, id: ProposalId) -> Result<&Proposal, GovernanceError> {
        self.proposals.proposal(id)
    }

    pub fn proposal_count(&self) -> usize {
        self.proposals.proposal_count()
    }

    // ---- election ----

    pub fn start_election(
        &mut self,
        caller: &MemberId,
        duration_secs: u64,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        self.election.start(&self.members, caller, duration_secs, now)
    }

    pub fn nominate_candidate(
        &mut self,
        caller: &MemberId,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        self.election.nominate(&self.members, caller, now)
    }

    pub fn vote_election(
        &mut self,
        caller: &MemberId,
        candidate_index: usize,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        self.election.vote(&self.members, caller, candidate_index, now)
    }

    pub fn end_election(
        &mut self,
        caller: &MemberId,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        self.election
            .end(&mut self.members, caller, self.policy.tie_break, now)
    }

    pub fn candidate_addresses(&self) -> Vec<MemberId> {
        self.election.candidate_addresses()
    }

    pub fn is_election_active(&self) -> bool {
        self.election.is_active()
    }

    pub fn election(&self) -> &Election {
        self.election.election()
    }
}
