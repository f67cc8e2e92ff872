//! InitiatePromotionHandler - Command handler for applying to become Executive.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::CommandMetadata;
use crate::domain::governance::{GovernanceError, GovernanceEvent};

/// The caller applies for promotion; the command carries no fields.
#[derive(Debug, Clone, Default)]
pub struct InitiatePromotionCommand;

#[derive(Debug, Clone)]
pub struct InitiatePromotionResult {
    pub event: GovernanceEvent,
}

pub struct InitiatePromotionHandler {
    writer: Arc<GovernanceWriter>,
}

impl InitiatePromotionHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    pub async fn handle(
        &self,
        _cmd: InitiatePromotionCommand,
        metadata: CommandMetadata,
    ) -> Result<InitiatePromotionResult, GovernanceError> {
        let event = self
            .writer
            .execute("initiate_promotion", &metadata, |ledger, caller, now| {
                ledger.initiate_promotion(caller, now)
            })
            .await?;

        Ok(InitiatePromotionResult { event })
    }
}
