//! EndElectionHandler - Command handler for closing an election.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::{CommandMetadata, MemberId};
use crate::domain::governance::{GovernanceError, GovernanceEvent};

/// Closes the active election once its deadline has passed.
#[derive(Debug, Clone, Default)]
pub struct EndElectionCommand;

#[derive(Debug, Clone)]
pub struct EndElectionResult {
    /// The President after the election (the incumbent if nobody was eligible).
    pub winner: MemberId,
    pub event: GovernanceEvent,
}

pub struct EndElectionHandler {
    writer: Arc<GovernanceWriter>,
}

impl EndElectionHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        _cmd: EndElectionCommand,
        metadata: CommandMetadata,
    ) -> Result<EndElectionResult, GovernanceError> {
        let event = self
            .writer
            .execute("end_election", &metadata, |ledger, caller, now| {
                ledger.end_election(caller, now)
            })
            .await?;

        let winner = match &event {
            GovernanceEvent::ElectionEnded { winner, .. } => winner.clone(),
            other => {
                return Err(GovernanceError::infrastructure(format!(
                    "end_election produced unexpected event {:?}",
                    other
                )))
            }
        };

        Ok(EndElectionResult { winner, event })
    }
}
