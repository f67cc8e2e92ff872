//! Proposal command and query handlers.

mod create_proposal;
mod execute_proposal;
mod get_proposal;
mod vote_proposal;

pub use create_proposal::{CreateProposalCommand, CreateProposalHandler, CreateProposalResult};
pub use execute_proposal::{
    ExecuteProposalCommand, ExecuteProposalHandler, ExecuteProposalResult,
};
pub use get_proposal::{GetProposalHandler, GetProposalQuery};
pub use vote_proposal::{VoteProposalCommand, VoteProposalHandler, VoteProposalResult};
