//! GetProposalHandler - Query handler for proposals.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::ProposalId;
use crate::domain::governance::GovernanceError;
use crate::domain::proposal::Proposal;

#[derive(Debug, Clone)]
pub struct GetProposalQuery {
    pub proposal_id: ProposalId,
}

pub struct GetProposalHandler {
    writer: Arc<GovernanceWriter>,
}

impl GetProposalHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(&self, query: GetProposalQuery) -> Result<Proposal, GovernanceError> {
        self.writer
            .read(move |ledger| ledger.proposal(query.proposal_id).cloned())
            .await
    }

    /// Number of proposals ever created.
    pub async fn count(&self) -> Result<usize, GovernanceError> {
        self.writer.read(|ledger| Ok(ledger.proposal_count())).await
    }
}
