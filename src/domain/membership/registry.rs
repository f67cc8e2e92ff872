//! Membership registry - source of truth for identities and roles.
//!
//! # Design Decisions
//!
//! - **Tombstones**: removal sets `active = false`; records are never deleted
//! - **Single President**: the founder starts as President and the role only
//!   moves through `transfer_presidency`, which demotes the incumbent in the
//!   same step
//! - **President is irremovable**: succession happens only by election

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, Timestamp};
use crate::domain::governance::{GovernanceError, GovernanceEvent};

use super::{Member, Role};

/// Membership table keyed by identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRegistry {
    members: BTreeMap<MemberId, Member>,
}

impl MembershipRegistry {
    /// Creates a registry whose only member is the founding President.
    pub fn founded_by(founder: MemberId, at: Timestamp) -> Self {
        let mut members = BTreeMap::new();
        members.insert(founder.clone(), Member::founder(founder, at));
        Self { members }
    }

    /// Registers a new identity with role Member.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if the identity was ever registered, active or not
    pub fn add_member(
        &mut self,
        identity: MemberId,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        if self.members.contains_key(&identity) {
            return Err(GovernanceError::already_exists("member", &identity));
        }

        self.members
            .insert(identity.clone(), Member::join(identity.clone(), now));

        Ok(GovernanceEvent::MemberAdded {
            identity,
            occurred_at: now,
        })
    }

    /// Tombstones an active member.
    ///
    /// Pending promotion requests and votes tied to the identity are left in
    /// place; they become inert because every later check requires an
    /// active member.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the caller is not an active Executive or President,
    ///   or if the target is the sitting President
    /// - `NotFound` if the target is unknown or already removed
    pub fn remove_member(
        &mut self,
        caller: &MemberId,
        identity: &MemberId,
        now: Timestamp,
    ) -> Result<GovernanceEvent, GovernanceError> {
        const ACTION: &str = "remove members";

        let actor = self.require_active(caller, ACTION)?;
        if !actor.role.can_remove_members() {
            return Err(GovernanceError::unauthorized(
                caller,
                ACTION,
                format!("role {} cannot remove members", actor.role),
            ));
        }

        let target = match self.members.get(identity) {
            Some(member) if member.active => member,
            _ => return Err(GovernanceError::not_found("active member", identity)),
        };
        if target.role == Role::President {
            return Err(GovernanceError::unauthorized(
                caller,
                ACTION,
                "the sitting President can only be replaced by election",
            ));
        }

        if let Some(member) = self.members.get_mut(identity) {
            member.deactivate();
        }

        Ok(GovernanceEvent::MemberRemoved {
            identity: identity.clone(),
            removed_by: caller.clone(),
            occurred_at: now,
        })
    }

    /// Returns the active flag; false if the identity was never registered.
    pub fn is_member(&self, identity: &MemberId) -> bool {
        self.members.get(identity).is_some_and(|m| m.active)
    }

    /// Returns the member record, including tombstoned members.
    pub fn member_details(&self, identity: &MemberId) -> Result<&Member, GovernanceError> {
        self.members
            .get(identity)
            .ok_or_else(|| GovernanceError::not_found("member", identity))
    }

    /// Number of members whose `active` flag is set.
    pub fn active_member_count(&self) -> usize {
        self.members.values().filter(|m| m.active).count()
    }

    /// The member currently holding the presidency.
    pub fn president(&self) -> Option<&Member> {
        self.members.values().find(|m| m.role == Role::President)
    }

    /// All members in identity order, tombstones included.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    /// Resolves `caller` to an active member.
    pub(crate) fn require_active(
        &self,
        caller: &MemberId,
        action: &'static str,
    ) -> Result<&Member, GovernanceError> {
        match self.members.get(caller) {
            Some(member) if member.active => Ok(member),
            Some(_) => Err(GovernanceError::unauthorized(caller, action, "member was removed")),
            None => Err(GovernanceError::unauthorized(caller, action, "not a member")),
        }
    }

    /// Resolves `caller` to an active member holding exactly `role`.
    pub(crate) fn require_role(
        &self,
        caller: &MemberId,
        role: Role,
        action: &'static str,
    ) -> Result<&Member, GovernanceError> {
        let member = self.require_active(caller, action)?;
        if member.role != role {
            return Err(GovernanceError::unauthorized(
                caller,
                action,
                format!("requires role {}, caller holds {}", role, member.role),
            ));
        }
        Ok(member)
    }

    pub(crate) fn promote_to_executive(
        &mut self,
        identity: &MemberId,
    ) -> Result<(), GovernanceError> {
        match self.members.get_mut(identity) {
            Some(member) if member.holds(Role::Member) => {
                member.assign_role(Role::Executive);
                Ok(())
            }
            _ => Err(GovernanceError::not_found("active member", identity)),
        }
    }

    /// Hands the presidency to `successor` and demotes the incumbent to Executive.
    ///
    /// Returns the previous President. A no-op if `successor` already holds office.
    pub(crate) fn transfer_presidency(
        &mut self,
        successor: &MemberId,
    ) -> Result<MemberId, GovernanceError> {
        let incumbent = self
            .president()
            .map(|m| m.identity.clone())
            .ok_or_else(|| GovernanceError::invalid_state("transfer presidency", "no sitting President"))?;

        if &incumbent == successor {
            return Ok(incumbent);
        }
        if !self.is_member(successor) {
            return Err(GovernanceError::not_found("active member", successor));
        }

        if let Some(previous) = self.members.get_mut(&incumbent) {
            previous.assign_role(Role::Executive);
        }
        if let Some(next) = self.members.get_mut(successor) {
            next.assign_role(Role::President);
        }
        Ok(incumbent)
    }
}
