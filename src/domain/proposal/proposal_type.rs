//! Proposal categories.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Category of a governance proposal.
///
/// The engine treats every type the same way; the category is carried for
/// the host's benefit (routing, display, follow-up automation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalType {
    General,
    Policy,
    Budget,
    Membership,
}

impl ProposalType {
    /// Returns the stable numeric code of this type.
    pub fn code(&self) -> u8 {
        match self {
            ProposalType::General => 0,
            ProposalType::Policy => 1,
            ProposalType::Budget => 2,
            ProposalType::Membership => 3,
        }
    }

    /// Parses a numeric proposal-type code.
    pub fn from_code(code: u8) -> Result<Self, ValidationError> {
        match code {
            0 => Ok(ProposalType::General),
            1 => Ok(ProposalType::Policy),
            2 => Ok(ProposalType::Budget),
            3 => Ok(ProposalType::Membership),
            other => Err(ValidationError::out_of_range(
                "proposal_type",
                0,
                3,
                i64::from(other),
            )),
        }
    }
}

impl std::fmt::Display for ProposalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProposalType::General => "general",
            ProposalType::Policy => "policy",
            ProposalType::Budget => "budget",
            ProposalType::Membership => "membership",
        };
        write!(f, "{}", name)
    }
}
