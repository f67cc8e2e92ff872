//! Proposal entity.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, ProposalId, Timestamp};

use super::ProposalType;

/// A governance item voted yes/no by members and executed by the President.
///
/// # Invariants
///
/// - `yes_count + no_count == voters.len()`
/// - Terminal once `executed` is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub description: String,
    pub proposal_type: ProposalType,
    pub creator: MemberId,
    voters: BTreeSet<MemberId>,
    pub yes_count: u32,
    pub no_count: u32,
    pub executed: bool,
    pub created_at: Timestamp,
    pub voting_ends_at: Timestamp,
}

impl Proposal {
    pub fn open(
        id: ProposalId,
        description: String,
        proposal_type: ProposalType,
        creator: MemberId,
        created_at: Timestamp,
        voting_ends_at: Timestamp,
    ) -> Self {
        Self {
            id,
            description,
            proposal_type,
            creator,
            voters: BTreeSet::new(),
            yes_count: 0,
            no_count: 0,
            executed: false,
            created_at,
            voting_ends_at,
        }
    }

    pub fn has_voted(&self, voter: &MemberId) -> bool {
        self.voters.contains(voter)
    }

    pub fn voters(&self) -> impl Iterator<Item = &MemberId> {
        self.voters.iter()
    }

    /// Total number of votes cast.
    pub fn votes_cast(&self) -> u32 {
        self.yes_count + self.no_count
    }

    /// True once `now` has reached the end of the voting window.
    pub fn voting_window_closed(&self, now: Timestamp) -> bool {
        now >= self.voting_ends_at
    }

    pub(crate) fn record_vote(&mut self, voter: MemberId, support: bool) {
        if self.voters.insert(voter) {
            if support {
                self.yes_count += 1;
            } else {
                self.no_count += 1;
            }
        }
    }

    pub(crate) fn mark_executed(&mut self) {
        self.executed = true;
    }
}
