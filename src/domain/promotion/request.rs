//! Promotion request entity.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, Timestamp};
use crate::domain::membership::Role;

/// A pending application from a Member to become Executive.
///
/// # Invariants
///
/// - `target_role` is always `Role::Executive`
/// - `approvers` never contains `candidate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRequest {
    pub candidate: MemberId,
    pub target_role: Role,
    approvers: BTreeSet<MemberId>,
    pub opened_at: Timestamp,
}

impl PromotionRequest {
    /// Opens a request with an empty approver set.
    pub fn open(candidate: MemberId, opened_at: Timestamp) -> Self {
        Self {
            candidate,
            target_role: Role::Executive,
            approvers: BTreeSet::new(),
            opened_at,
        }
    }

    /// Number of distinct approvals recorded.
    pub fn approval_count(&self) -> u32 {
        u32::try_from(self.approvers.len()).unwrap_or(u32::MAX)
    }

    pub fn has_approved(&self, approver: &MemberId) -> bool {
        self.approvers.contains(approver)
    }

    pub fn approvers(&self) -> impl Iterator<Item = &MemberId> {
        self.approvers.iter()
    }

    pub(crate) fn record_approval(&mut self, approver: MemberId) -> u32 {
        self.approvers.insert(approver);
        self.approval_count()
    }
}

/// Read model returned by `getPromotionRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRequestView {
    pub candidate: MemberId,
    pub target_role: Role,
    pub approval_count: u32,
}

impl From<&PromotionRequest> for PromotionRequestView {
    fn from(request: &PromotionRequest) -> Self {
        Self {
            candidate: request.candidate.clone(),
            target_role: request.target_role,
            approval_count: request.approval_count(),
        }
    }
}
