//! ExecuteProposalHandler - Command handler for executing a passing proposal.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::{CommandMetadata, ProposalId};
use crate::domain::governance::{GovernanceError, GovernanceEvent};

/// Marks a proposal executed. President only; yes must strictly exceed no
/// and participation must meet the configured quorum.
#[derive(Debug, Clone)]
pub struct ExecuteProposalCommand {
    pub proposal_id: ProposalId,
}

#[derive(Debug, Clone)]
pub struct ExecuteProposalResult {
    pub event: GovernanceEvent,
}

pub struct ExecuteProposalHandler {
    writer: Arc<GovernanceWriter>,
}

impl ExecuteProposalHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        cmd: ExecuteProposalCommand,
        metadata: CommandMetadata,
    ) -> Result<ExecuteProposalResult, GovernanceError> {
        let event = self
            .writer
            .execute("execute_proposal", &metadata, move |ledger, caller, now| {
                ledger.execute_proposal(caller, cmd.proposal_id, now)
            })
            .await?;

        Ok(ExecuteProposalResult { event })
    }
}
