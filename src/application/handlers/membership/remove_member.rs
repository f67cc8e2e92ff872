//! RemoveMemberHandler - Command handler for tombstoning a member.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::{CommandMetadata, MemberId};
use crate::domain::governance::{GovernanceError, GovernanceEvent};

/// Command to deactivate a member. Requires an Executive or the President.
#[derive(Debug, Clone)]
pub struct RemoveMemberCommand {
    pub identity: MemberId,
}

#[derive(Debug, Clone)]
pub struct RemoveMemberResult {
    pub event: GovernanceEvent,
}

pub struct RemoveMemberHandler {
    writer: Arc<GovernanceWriter>,
}

impl RemoveMemberHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        cmd: RemoveMemberCommand,
        metadata: CommandMetadata,
    ) -> Result<RemoveMemberResult, GovernanceError> {
        let event = self
            .writer
            .execute("remove_member", &metadata, move |ledger, caller, now| {
                ledger.remove_member(caller, &cmd.identity, now)
            })
            .await?;

        Ok(RemoveMemberResult { event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{as_member, harness, id, promote};
    use crate::ports::Clock;

    #[tokio::test]
    async fn executive_removes_member() {
        let h = harness(&["exec", "alice"]).await;
        promote(&h, "exec").await;
        let handler = RemoveMemberHandler::new(h.writer.clone());

        let result = handler
            .handle(RemoveMemberCommand { identity: id("alice") }, as_member("exec"))
            .await
            .unwrap();

        assert_eq!(
            result.event,
            GovernanceEvent::MemberRemoved {
                identity: id("alice"),
                removed_by: id("exec"),
                occurred_at: h.clock.now(),
            }
        );
        let still_member = h.writer.read(|l| Ok(l.is_member(&id("alice")))).await.unwrap();
        assert!(!still_member);
    }

    #[tokio::test]
    async fn plain_member_cannot_remove() {
        let h = harness(&["alice", "bob"]).await;
        let handler = RemoveMemberHandler::new(h.writer.clone());

        let result = handler
            .handle(RemoveMemberCommand { identity: id("bob") }, as_member("alice"))
            .await;

        assert!(matches!(result, Err(GovernanceError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn removing_twice_is_not_found() {
        let h = harness(&["alice"]).await;
        let handler = RemoveMemberHandler::new(h.writer.clone());
        let cmd = RemoveMemberCommand { identity: id("alice") };

        handler.handle(cmd.clone(), as_member("founder")).await.unwrap();
        let again = handler.handle(cmd, as_member("founder")).await;

        assert!(matches!(again, Err(GovernanceError::NotFound { .. })));
        assert_eq!(h.bus.event_count(), 1);
    }
}
