//! Role definitions.
//!
//! The role hierarchy is a closed enumeration. Behavior differs only by
//! role-check guards, so there is no per-role type.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Role held by a member of the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Baseline participant with voting rights.
    Member,

    /// Promoted member.
    /// - May remove members
    /// - May nominate for President
    Executive,

    /// Singleton top role.
    /// - Starts and ends elections
    /// - Executes proposals
    /// - May remove members
    President,
}

impl Role {
    /// Returns the stable numeric code of this role (Member = 0 ... President = 2).
    pub fn code(&self) -> u8 {
        match self {
            Role::Member => 0,
            Role::Executive => 1,
            Role::President => 2,
        }
    }

    /// Parses a numeric role code.
    pub fn from_code(code: u8) -> Result<Self, ValidationError> {
        match code {
            0 => Ok(Role::Member),
            1 => Ok(Role::Executive),
            2 => Ok(Role::President),
            other => Err(ValidationError::out_of_range("role", 0, 2, i64::from(other))),
        }
    }

    /// Returns the display name for this role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Executive => "Executive",
            Role::President => "President",
        }
    }

    /// Returns true if holders of this role may remove members.
    pub fn can_remove_members(&self) -> bool {
        matches!(self, Role::Executive | Role::President)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
