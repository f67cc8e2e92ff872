//! AddMemberHandler - Command handler for registering a new member.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::{CommandMetadata, MemberId};
use crate::domain::governance::{GovernanceError, GovernanceEvent};

/// Command to register a new identity with role Member.
#[derive(Debug, Clone)]
pub struct AddMemberCommand {
    pub identity: MemberId,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct AddMemberResult {
    pub event: GovernanceEvent,
}

/// Handler for adding members.
///
/// The caller is recorded in the event metadata but not role-checked.
pub struct AddMemberHandler {
    writer: Arc<GovernanceWriter>,
}

impl AddMemberHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        cmd: AddMemberCommand,
        metadata: CommandMetadata,
    ) -> Result<AddMemberResult, GovernanceError> {
        let event = self
            .writer
            .execute("add_member", &metadata, move |ledger, _, now| {
                ledger.add_member(cmd.identity, now)
            })
            .await?;

        Ok(AddMemberResult { event })
    }
}
