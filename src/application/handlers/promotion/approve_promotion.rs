//! ApprovePromotionHandler - Command handler for approving a promotion request.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::{CommandMetadata, MemberId};
use crate::domain::governance::{GovernanceError, GovernanceEvent};

#[derive(Debug, Clone)]
pub struct ApprovePromotionCommand {
    pub candidate: MemberId,
}

#[derive(Debug, Clone)]
pub struct ApprovePromotionResult {
    pub event: GovernanceEvent,
    /// True when this approval met the threshold and the candidate is now Executive.
    pub promoted: bool,
}

pub struct ApprovePromotionHandler {
    writer: Arc<GovernanceWriter>,
}

impl ApprovePromotionHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        cmd: ApprovePromotionCommand,
        metadata: CommandMetadata,
    ) -> Result<ApprovePromotionResult, GovernanceError> {
        let event = self
            .writer
            .execute("approve_promotion", &metadata, move |ledger, caller, now| {
                ledger.approve_promotion(caller, &cmd.candidate, now)
            })
            .await?;

        let promoted = matches!(event, GovernanceEvent::PromotionApproved { .. });
        Ok(ApprovePromotionResult { event, promoted })
    }
}
