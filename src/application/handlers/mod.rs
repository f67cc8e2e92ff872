//! Application handlers.
//!
//! One command or query handler per governance operation. Every handler
//! delegates to the shared `GovernanceWriter`, which serializes access to
//! the ledger.

pub mod election;
pub mod membership;
pub mod promotion;
pub mod proposal;

#[cfg(test)]
pub(crate) mod test_support;

pub use election::{
    EndElectionCommand, EndElectionHandler, EndElectionResult, GetElectionHandler,
    NominateCandidateCommand, NominateCandidateHandler, NominateCandidateResult,
    StartElectionCommand, StartElectionHandler, StartElectionResult, VoteElectionCommand,
    VoteElectionHandler, VoteElectionResult,
};
pub use membership::{
    AddMemberCommand, AddMemberHandler, AddMemberResult, GetMemberHandler, GetMemberQuery,
    RemoveMemberCommand, RemoveMemberHandler, RemoveMemberResult,
};
pub use promotion::{
    ApprovePromotionCommand, ApprovePromotionHandler, ApprovePromotionResult,
    GetPromotionRequestHandler, GetPromotionRequestQuery, InitiatePromotionCommand,
    InitiatePromotionHandler, InitiatePromotionResult,
};
pub use proposal::{
    CreateProposalCommand, CreateProposalHandler, CreateProposalResult, ExecuteProposalCommand,
    ExecuteProposalHandler, ExecuteProposalResult, GetProposalHandler, GetProposalQuery,
    VoteProposalCommand, VoteProposalHandler, VoteProposalResult,
};
