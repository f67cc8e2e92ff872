//! Tie-break policy for election results.

use serde::{Deserialize, Serialize};

/// Chooses among candidates sharing the highest vote count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The earliest nominated candidate wins.
    #[default]
    FirstNominated,
    /// The most recently nominated candidate wins.
    LatestNominated,
}

impl TieBreak {
    /// Whether a challenger with `challenger` votes displaces the current
    /// leader with `leader` votes, given the challenger was nominated later.
    pub(crate) fn displaces(&self, challenger: u32, leader: u32) -> bool {
        match self {
            TieBreak::FirstNominated => challenger > leader,
            TieBreak::LatestNominated => challenger >= leader,
        }
    }
}

impl std::str::FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first_nominated" | "first" => Ok(TieBreak::FirstNominated),
            "latest_nominated" | "latest" => Ok(TieBreak::LatestNominated),
            other => Err(format!("unknown tie-break policy '{}'", other)),
        }
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TieBreak::FirstNominated => write!(f, "first_nominated"),
            TieBreak::LatestNominated => write!(f, "latest_nominated"),
        }
    }
}
