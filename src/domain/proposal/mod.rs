//! Proposal domain module.
//!
//! - `proposal_type` - Proposal categories with stable numeric codes
//! - `proposal` - Proposal entity
//! - `quorum` - Participation quorum policy
//! - `engine` - ProposalEngine (create / vote / execute)

mod engine;
#[allow(clippy::module_inception)]
mod proposal;
mod proposal_type;
mod quorum;

pub use engine::ProposalEngine;
pub use proposal::Proposal;
pub use proposal_type::ProposalType;
pub use quorum::ParticipationQuorum;
