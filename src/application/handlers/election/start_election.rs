//! StartElectionHandler - Command handler for opening a presidential election.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::{CommandMetadata, Timestamp};
use crate::domain::governance::{GovernanceError, GovernanceEvent};

#[derive(Debug, Clone)]
pub struct StartElectionCommand {
    /// Seconds from now until the election may be ended.
    pub duration_secs: u64,
}

#[derive(Debug, Clone)]
pub struct StartElectionResult {
    pub end_time: Timestamp,
    pub event: GovernanceEvent,
}

pub struct StartElectionHandler {
    writer: Arc<GovernanceWriter>,
}

impl StartElectionHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        cmd: StartElectionCommand,
        metadata: CommandMetadata,
    ) -> Result<StartElectionResult, GovernanceError> {
        let event = self
            .writer
            .execute("start_election", &metadata, move |ledger, caller, now| {
                ledger.start_election(caller, cmd.duration_secs, now)
            })
            .await?;

        match event {
            GovernanceEvent::ElectionStarted { end_time, .. } => {
                Ok(StartElectionResult { end_time, event })
            }
            other => Err(GovernanceError::infrastructure(format!(
                "start_election produced unexpected event {:?}",
                other
            ))),
        }
    }
}
