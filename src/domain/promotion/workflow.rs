//! Promotion workflow - Member → Executive by approval.
//!
//! A Member opens a request for themselves; other active members approve it.
//! When the approval count reaches the configured threshold the candidate is
//! promoted and the request is deleted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, Timestamp};
use crate::domain::governance::{GovernanceError, GovernanceEvent};
use crate::domain::membership::{MembershipRegistry, Role};

use super::{PromotionRequest, PromotionRequestView};

/// Promotion-request table keyed by candidate identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionWorkflow {
    requests: BTreeMap<MemberId, PromotionRequest>,
}

impl PromotionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a promotion request for the caller.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` unless the caller is an active member with role exactly Member
    /// - `AlreadyExists` if the caller already has an open request
    pub fn initiate(
        &mut self,
        registry: &MembershipRegistry,
        caller: &MemberId,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        registry.require_role(caller, Role::Member, "request promotion")?;

        if self.requests.contains_key(caller) {
            return Err(GovernanceError::already_exists("promotion request", caller));
        }

        let request = PromotionRequest::open(caller.clone(), now);
        let target_role = request.target_role;
        self.requests.insert(caller.clone(), request);

        Ok(GovernanceEvent::PromotionInitiated {
            candidate: caller.clone(),
            target_role,
            role_code: target_role.code(),
            occurred_at: now,
        })
    }

    /// Records the caller's approval of `candidate`'s request.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the caller is not active or is the candidate
    /// - `NotFound` if no request is open or the candidate was removed
    /// - `AlreadyExists` if the caller already approved
    pub fn approve(
        &mut self,
        registry: &mut MembershipRegistry,
        caller: &MemberId,
        candidate: &MemberId,
        threshold: u32,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        const ACTION: &str = "approve promotions";

        registry.require_active(caller, ACTION)?;
        if caller == candidate {
            return Err(GovernanceError::unauthorized(
                caller,
                ACTION,
                "candidates cannot approve their own request",
            ));
        }

        let request = self
            .requests
            .get(candidate)
            .filter(|_| registry.is_member(candidate))
            .ok_or_else(|| GovernanceError::not_found("promotion request", candidate))?;

        if request.has_approved(caller) {
            return Err(GovernanceError::already_exists(
                "approval",
                format!("{} for {}", caller, candidate),
            ));
        }

        let approval_count = request.approval_count() + 1;
        if approval_count >= threshold {
            registry.promote_to_executive(candidate)?;
            self.requests.remove(candidate);
            return Ok(GovernanceEvent::PromotionApproved {
                candidate: candidate.clone(),
                occurred_at: now,
            });
        }

        if let Some(request) = self.requests.get_mut(candidate) {
            request.record_approval(caller.clone());
        }
        Ok(GovernanceEvent::PromotionApprovalRecorded {
            candidate: candidate.clone(),
            approver: caller.clone(),
            approval_count,
            occurred_at: now,
        })
    }

    /// Returns (candidate, target role, approval count) of an open request.
    pub fn request(&self, candidate: &MemberId) -> Result<PromotionRequestView, GovernanceError> {
        self.requests
            .get(candidate)
            .map(PromotionRequestView::from)
            .ok_or_else(|| GovernanceError::not_found("promotion request", candidate))
    }

    pub fn open_requests(&self) -> impl Iterator<Item = &PromotionRequest> {
        self.requests.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> MemberId {
        MemberId::new(s).unwrap()
    }

    fn now() -> Timestamp {
        Timestamp::from_unix_secs(50)
    }

    fn setup() -> (MembershipRegistry, PromotionWorkflow) {
        let mut registry = MembershipRegistry::founded_by(id("founder"), Timestamp::epoch());
        for name in ["alice", "bob", "carol"] {
            registry.add_member(id(name), now()).unwrap();
        }
        (registry, PromotionWorkflow::new())
    }

    #[test]
    fn member_can_initiate() {
        let (registry, mut workflow) = setup();

        let event = workflow.initiate(&registry, &id("alice"), now()).unwrap();

        assert_eq!(
            event,
            GovernanceEvent::PromotionInitiated {
                candidate: id("alice"),
                target_role: Role::Executive,
                role_code: 1,
                occurred_at: now(),
            }
        );
        let view = workflow.request(&id("alice")).unwrap();
        assert_eq!(view.candidate, id("alice"));
        assert_eq!(view.target_role, Role::Executive);
        assert_eq!(view.approval_count, 0);
    }

    #[test]
    fn president_cannot_initiate() {
        let (registry, mut workflow) = setup();
        let result = workflow.initiate(&registry, &id("founder"), now());
        assert!(matches!(result, Err(GovernanceError::Unauthorized { .. })));
    }

    #[test]
    fn non_member_cannot_initiate() {
        let (registry, mut workflow) = setup();
        let result = workflow.initiate(&registry, &id("ghost"), now());
        assert!(matches!(result, Err(GovernanceError::Unauthorized { .. })));
    }

    #[test]
    fn second_open_request_fails() {
        let (registry, mut workflow) = setup();
        workflow.initiate(&registry, &id("alice"), now()).unwrap();

        let result = workflow.initiate(&registry, &id("alice"), now());
        assert!(matches!(result, Err(GovernanceError::AlreadyExists { .. })));
    }

    #[test]
    fn single_approval_promotes_at_default_threshold() {
        let (mut registry, mut workflow) = setup();
        workflow.initiate(&registry, &id("alice"), now()).unwrap();

        let event = workflow
            .approve(&mut registry, &id("bob"), &id("alice"), 1, now())
            .unwrap();

        assert!(matches!(event, GovernanceEvent::PromotionApproved { .. }));
        assert_eq!(registry.member_details(&id("alice")).unwrap().role, Role::Executive);
        assert!(matches!(
            workflow.request(&id("alice")),
            Err(GovernanceError::NotFound { .. })
        ));
    }

    #[test]
    fn approvals_below_threshold_leave_role_unchanged() {
        let (mut registry, mut workflow) = setup();
        workflow.initiate(&registry, &id("alice"), now()).unwrap();

        let event = workflow
            .approve(&mut registry, &id("bob"), &id("alice"), 2, now())
            .unwrap();

        assert!(matches!(
            event,
            GovernanceEvent::PromotionApprovalRecorded { approval_count: 1, .. }
        ));
        assert_eq!(registry.member_details(&id("alice")).unwrap().role, Role::Member);
        assert_eq!(workflow.request(&id("alice")).unwrap().approval_count, 1);

        workflow
            .approve(&mut registry, &id("carol"), &id("alice"), 2, now())
            .unwrap();
        assert_eq!(registry.member_details(&id("alice")).unwrap().role, Role::Executive);
    }

    #[test]
    fn self_approval_is_unauthorized() {
        let (mut registry, mut workflow) = setup();
        workflow.initiate(&registry, &id("alice"), now()).unwrap();

        let result = workflow.approve(&mut registry, &id("alice"), &id("alice"), 1, now());
        assert!(matches!(result, Err(GovernanceError::Unauthorized { .. })));
    }

    #[test]
    fn approving_without_request_fails_not_found() {
        let (mut registry, mut workflow) = setup();
        let result = workflow.approve(&mut registry, &id("bob"), &id("alice"), 1, now());
        assert!(matches!(result, Err(GovernanceError::NotFound { .. })));
    }

    #[test]
    fn duplicate_approval_fails_already_exists() {
        let (mut registry, mut workflow) = setup();
        workflow.initiate(&registry, &id("alice"), now()).unwrap();
        workflow
            .approve(&mut registry, &id("bob"), &id("alice"), 3, now())
            .unwrap();

        let result = workflow.approve(&mut registry, &id("bob"), &id("alice"), 3, now());
        assert!(matches!(result, Err(GovernanceError::AlreadyExists { .. })));
        assert_eq!(workflow.request(&id("alice")).unwrap().approval_count, 1);
    }

    #[test]
    fn request_of_removed_candidate_is_inert() {
        let (mut registry, mut workflow) = setup();
        workflow.initiate(&registry, &id("alice"), now()).unwrap();
        registry.remove_member(&id("founder"), &id("alice"), now()).unwrap();

        let result = workflow.approve(&mut registry, &id("bob"), &id("alice"), 1, now());
        assert!(matches!(result, Err(GovernanceError::NotFound { .. })));
        assert_eq!(registry.member_details(&id("alice")).unwrap().role, Role::Member);
    }
}
