//! VoteProposalHandler - Command handler for yes/no votes on proposals.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::{CommandMetadata, ProposalId};
use crate::domain::governance::{GovernanceError, GovernanceEvent};

#[derive(Debug, Clone)]
pub struct VoteProposalCommand {
    pub proposal_id: ProposalId,
    pub support: bool,
}

#[derive(Debug, Clone)]
pub struct VoteProposalResult {
    pub event: GovernanceEvent,
}

pub struct VoteProposalHandler {
    writer: Arc<GovernanceWriter>,
}

impl VoteProposalHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        cmd: VoteProposalCommand,
        metadata: CommandMetadata,
    ) -> Result<VoteProposalResult, GovernanceError> {
        let event = self
            .writer
            .execute("vote_proposal", &metadata, move |ledger, caller, now| {
                ledger.vote_proposal(caller, cmd.proposal_id, cmd.support, now)
            })
            .await?;

        Ok(VoteProposalResult { event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        as_member, harness, harness_with_policy, id, Harness,
    };
    use crate::domain::foundation::Timestamp;
    use crate::domain::governance::GovernancePolicy;
    use crate::domain::proposal::ProposalType;

    async fn create(h: &Harness, secs: u64) {
        h.writer
            .execute("create_proposal", &as_member("founder"), move |ledger, caller, now| {
                ledger.create_proposal(caller, "Budget".into(), ProposalType::Budget, secs, now)
            })
            .await
            .unwrap();
    }

    fn yes() -> VoteProposalCommand {
        VoteProposalCommand {
            proposal_id: ProposalId::FIRST,
            support: true,
        }
    }

    #[tokio::test]
    async fn vote_is_recorded() {
        let h = harness(&["alice"]).await;
        create(&h, 60).await;
        let handler = VoteProposalHandler::new(h.writer.clone());

        let result = handler.handle(yes(), as_member("alice")).await.unwrap();

        assert_eq!(
            result.event,
            GovernanceEvent::VoteCast {
                voter: id("alice"),
                proposal_id: ProposalId::FIRST,
                support: true,
                occurred_at: Timestamp::from_unix_secs(0),
            }
        );
        let yes_count = h
            .writer
            .read(|l| l.proposal(ProposalId::FIRST).map(|p| p.yes_count))
            .await
            .unwrap();
        assert_eq!(yes_count, 1);
    }

    #[tokio::test]
    async fn double_vote_is_already_exists() {
        let h = harness(&["alice"]).await;
        create(&h, 60).await;
        let handler = VoteProposalHandler::new(h.writer.clone());
        handler.handle(yes(), as_member("alice")).await.unwrap();

        let again = handler.handle(yes(), as_member("alice")).await;

        assert!(matches!(again, Err(GovernanceError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn unknown_proposal_is_not_found() {
        let h = harness(&["alice"]).await;
        let handler = VoteProposalHandler::new(h.writer.clone());

        let result = handler.handle(yes(), as_member("alice")).await;

        assert!(matches!(result, Err(GovernanceError::NotFound { .. })));
    }

    #[tokio::test]
    async fn removed_member_cannot_vote() {
        let h = harness(&["alice"]).await;
        create(&h, 60).await;
        h.writer
            .execute("remove_member", &as_member("founder"), |ledger, caller, now| {
                ledger.remove_member(caller, &id("alice"), now)
            })
            .await
            .unwrap();
        let handler = VoteProposalHandler::new(h.writer.clone());

        let result = handler.handle(yes(), as_member("alice")).await;

        assert!(matches!(result, Err(GovernanceError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn late_vote_rejected_when_window_enforced() {
        let policy = GovernancePolicy {
            enforce_proposal_voting_window: true,
            ..Default::default()
        };
        let h = harness_with_policy(&["alice"], policy).await;
        create(&h, 60).await;
        h.clock.advance_secs(61);
        let handler = VoteProposalHandler::new(h.writer.clone());

        let result = handler.handle(yes(), as_member("alice")).await;

        assert!(matches!(result, Err(GovernanceError::InvalidState { .. })));
    }
}
