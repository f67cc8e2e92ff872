//! CreateProposalHandler - Command handler for opening a proposal.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::{CommandMetadata, ProposalId};
use crate::domain::governance::{GovernanceError, GovernanceEvent};
use crate::domain::proposal::ProposalType;

#[derive(Debug, Clone)]
pub struct CreateProposalCommand {
    pub description: String,
    pub proposal_type: ProposalType,
    /// Length of the voting window in seconds.
    pub duration_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CreateProposalResult {
    pub proposal_id: ProposalId,
    pub event: GovernanceEvent,
}

pub struct CreateProposalHandler {
    writer: Arc<GovernanceWriter>,
}

impl CreateProposalHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        cmd: CreateProposalCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateProposalResult, GovernanceError> {
        let event = self
            .writer
            .execute("create_proposal", &metadata, move |ledger, caller, now| {
                ledger.create_proposal(
                    caller,
                    cmd.description,
                    cmd.proposal_type,
                    cmd.duration_secs,
                    now,
                )
            })
            .await?;

        match event {
            GovernanceEvent::ProposalCreated { proposal_id, .. } => Ok(CreateProposalResult {
                proposal_id,
                event,
            }),
            other => Err(GovernanceError::infrastructure(format!(
                "create_proposal produced unexpected event {:?}",
                other
            ))),
        }
    }
}
