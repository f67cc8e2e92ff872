//! GetPromotionRequestHandler - Query handler for open promotion requests.

use std::sync::Arc;

use crate::application::GovernanceWriter;
use crate::domain::foundation::MemberId;
use crate::domain::governance::GovernanceError;
use crate::domain::promotion::PromotionRequestView;

#[derive(Debug, Clone)]
pub struct GetPromotionRequestQuery {
    pub candidate: MemberId,
}

pub struct GetPromotionRequestHandler {
    writer: Arc<GovernanceWriter>,
}

impl GetPromotionRequestHandler {
    pub fn new(writer: Arc<GovernanceWriter>) -> Self {
        Self { writer }
    }

    /// Returns (candidate, target role, approval count) of an open request.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the candidate has no open request
    pub async fn handle(
        &self,
        query: GetPromotionRequestQuery,
    ) -> Result<PromotionRequestView, GovernanceError> {
        self.writer
            .read(move |ledger| ledger.promotion_request(&query.candidate))
            .await
    }
}
