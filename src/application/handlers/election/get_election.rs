//! GetElectionHandler - Query handler for election state.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::election::Election;
use crate::domain::foundation::MemberId;
use crate::domain::governance::GovernanceError;

pub struct GetElectionHandler {
    writer: Arc<GovernanceWriter>,
}

impl GetElectionHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    /// Snapshot of phase, end time, candidates and tallies.
    pub async fn handle(&self) -> Result<Election, GovernanceError> {
        self.writer.read(|ledger| Ok(ledger.election().clone())).await
    }

    /// Nominated identities in nomination order.
    pub async fn candidate_addresses(&self) -> Result<Vec<MemberId>, GovernanceError> {
        self.writer.read(|ledger| Ok(ledger.candidate_addresses())).await
    }

    /// The stored phase flag; never derived from the clock.
    pub async fn is_active(&self) -> Result<bool, GovernanceError> {
        self.writer.read(|ledger| Ok(ledger.is_election_active())).await
    }
}
