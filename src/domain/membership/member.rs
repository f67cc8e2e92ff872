//! Member entity.
//!
//! A member is never physically deleted. Removal flips `active` to false and
//! leaves the record resolvable for read paths (tombstone).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, Timestamp};

use super::Role;

/// A registered identity and its standing in the organization.
///
/// # Invariants
///
/// - `identity` is unique across active and tombstoned members
/// - A tombstoned member never becomes active again
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub identity: MemberId,
    pub role: Role,
    pub active: bool,
    pub joined_at: Timestamp,
}

impl Member {
    /// Registers a new baseline member.
    pub fn join(identity: MemberId, joined_at: Timestamp) -> Self {
        Self {
            identity,
            role: Role::Member,
            active: true,
            joined_at,
        }
    }

    /// Registers the founding President.
    pub fn founder(identity: MemberId, joined_at: Timestamp) -> Self {
        Self {
            identity,
            role: Role::President,
            active: true,
            joined_at,
        }
    }

    /// Returns true if the member is active and holds exactly `role`.
    pub fn holds(&self, role: Role) -> bool {
        self.active && self.role == role
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    pub(crate) fn assign_role(&mut self, role: Role) {
        self.role = role;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> MemberId {
        MemberId::new("carol").unwrap()
    }

    #[test]
    fn join_starts_as_active_member() {
        let member = Member::join(identity(), Timestamp::epoch());
        assert_eq!(member.role, Role::Member);
        assert!(member.active);
    }

    #[test]
    fn founder_starts_as_president() {
        let member = Member::founder(identity(), Timestamp::epoch());
        assert!(member.holds(Role::President));
    }

    #[test]
    fn tombstoned_member_holds_no_role() {
        let mut member = Member::join(identity(), Timestamp::epoch());
        member.deactivate();
        assert!(!member.holds(Role::Member));
        assert_eq!(member.role, Role::Member);
    }
}
