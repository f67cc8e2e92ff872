//! GetMemberHandler - Query handler for membership lookups.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::MemberId;
use crate::domain::governance::GovernanceError;
use crate::domain::membership::Member;

/// Query for a single identity.
#[derive(Debug, Clone)]
pub struct GetMemberQuery {
    pub identity: MemberId,
}

pub struct GetMemberHandler {
    writer: Arc<GovernanceWriter>,
}

impl GetMemberHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    /// Returns the member record, tombstoned members included.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the identity was never registered
    pub async fn handle(&self, query: GetMemberQuery) -> Result<Member, GovernanceError> {
        self.writer
            .read(move |ledger| ledger.member_details(&query.identity).cloned())
            .await
    }

    /// True only for registered, active identities.
    pub async fn is_member(&self, query: GetMemberQuery) -> Result<bool, GovernanceError> {
        self.writer
            .read(move |ledger| Ok(ledger.is_member(&query.identity)))
            .await
    }
}
