//! VoteElectionHandler - Command handler for casting an election ballot.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::CommandMetadata;
use crate::domain::governance::{GovernanceError, GovernanceEvent};

#[derive(Debug, Clone)]
pub struct VoteElectionCommand {
    /// Position in the nomination order.
    pub candidate_index: usize,
}

#[derive(Debug, Clone)]
pub struct VoteElectionResult {
    pub event: GovernanceEvent,
}

pub struct VoteElectionHandler {
    writer: Arc<GovernanceWriter>,
}

impl VoteElectionHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        cmd: VoteElectionCommand,
        metadata: CommandMetadata,
    ) -> Result<VoteElectionResult, GovernanceError> {
        let event = self
            .writer
            .execute("vote_election", &metadata, move |ledger, caller, now| {
                ledger.vote_election(caller, cmd.candidate_index, now)
            })
            .await?;

        Ok(VoteElectionResult { event })
    }
}
