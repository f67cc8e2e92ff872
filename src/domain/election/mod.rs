//! Election domain module.
//!
//! - `phase` - Inactive/Active state machine
//! - `election` - Singleton election record and candidates
//! - `tie_break` - Policy for equal top tallies
//! - `engine` - ElectionEngine (start / nominate / vote / end)

#[allow(clippy::module_inception)]
mod election;
mod engine;
mod phase;
mod tie_break;

pub use election::{Candidate, Election};
pub use engine::ElectionEngine;
pub use phase::ElectionPhase;
pub use tie_break::TieBreak;
