//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate the ledger through `GovernanceWriter`; query
//! handlers read a consistent snapshot through the same writer.

pub mod handlers;
mod writer;

pub use writer::{GovernanceWriter, LedgerBootstrap};

pub use handlers::{
    AddMemberCommand, AddMemberHandler, AddMemberResult, ApprovePromotionCommand,
    ApprovePromotionHandler, ApprovePromotionResult, CreateProposalCommand, CreateProposalHandler,
    CreateProposalResult, EndElectionCommand, EndElectionHandler, EndElectionResult,
    ExecuteProposalCommand, ExecuteProposalHandler, ExecuteProposalResult, GetElectionHandler,
    GetMemberHandler, GetMemberQuery, GetPromotionRequestHandler, GetPromotionRequestQuery,
    GetProposalHandler, GetProposalQuery, InitiatePromotionCommand, InitiatePromotionHandler,
    InitiatePromotionResult, NominateCandidateCommand, NominateCandidateHandler,
    NominateCandidateResult, RemoveMemberCommand, RemoveMemberHandler, RemoveMemberResult,
    StartElectionCommand, StartElectionHandler, StartElectionResult, VoteElectionCommand,
    VoteElectionHandler, VoteElectionResult, VoteProposalCommand, VoteProposalHandler,
    VoteProposalResult,
};
