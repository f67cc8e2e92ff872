//! NominateCandidateHandler - Command handler for Executive self-nomination.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::CommandMetadata;
use crate::domain::governance::{GovernanceError, GovernanceEvent};

/// The calling Executive stands for President.
#[derive(Debug, Clone, Default)]
pub struct NominateCandidateCommand;

#[derive(Debug, Clone)]
pub struct NominateCandidateResult {
    pub event: GovernanceEvent,
}

pub struct NominateCandidateHandler {
    writer: Arc<GovernanceWriter>,
}

impl NominateCandidateHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        _cmd: NominateCandidateCommand,
        metadata: CommandMetadata,
    ) -> Result<NominateCandidateResult, GovernanceError> {
        let event = self
            .writer
            .execute("nominate_candidate", &metadata, |ledger, caller, now| {
                ledger.nominate_candidate(caller, now)
            })
            .await?;

        Ok(NominateCandidateResult { event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{as_member, harness, id, promote};

    #[tokio::test]
    async fn executive_is_nominated_in_order() {
        let h = harness(&["e1", "e2"]).await;
        promote(&h, "e1").await;
        promote(&h, "e2").await;
        h.writer
            .execute("start_election", &as_member("founder"), |ledger, caller, now| {
                ledger.start_election(caller, 60, now)
            })
            .await
            .unwrap();
        let handler = NominateCandidateHandler::new(h.writer.clone());

        handler.handle(NominateCandidateCommand, as_member("e2")).await.unwrap();
        let result = handler.handle(NominateCandidateCommand, as_member("e1")).await.unwrap();

        assert!(matches!(
            result.event,
            GovernanceEvent::CandidateNominated { ref candidate, .. } if candidate == &id("e1")
        ));
        let candidates = h.writer.read(|l| Ok(l.candidate_addresses())).await.unwrap();
        assert_eq!(candidates, vec![id("e2"), id("e1")]);
    }

    #[tokio::test]
    async fn nomination_without_election_is_invalid_state() {
        let h = harness(&["e1"]).await;
        promote(&h, "e1").await;
        let handler = NominateCandidateHandler::new(h.writer.clone());

        let result = handler.handle(NominateCandidateCommand, as_member("e1")).await;

        assert!(matches!(result, Err(GovernanceError::InvalidState { .. })));
    }

    #[tokio::test]
    async fn president_cannot_nominate() {
        let h = harness(&[]).await;
        h.writer
            .execute("start_election", &as_member("founder"), |ledger, caller, now| {
                ledger.start_election(caller, 60, now)
            })
            .await
            .unwrap();
        let handler = NominateCandidateHandler::new(h.writer.clone());

        let result = handler.handle(NominateCandidateCommand, as_member("founder")).await;

        assert!(matches!(result, Err(GovernanceError::Unauthorized { .. })));
    }
}
