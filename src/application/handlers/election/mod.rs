//! Election command and query handlers.

mod end_election;
mod get_election;
mod nominate_candidate;
mod start_election;
mod vote_election;

pub use end_election::{EndElectionCommand, EndElectionHandler, EndElectionResult};
pub use get_election::GetElectionHandler;
pub use nominate_candidate::{
    NominateCandidateCommand, NominateCandidateHandler, NominateCandidateResult,
};
pub use start_election::{StartElectionCommand, StartElectionHandler, StartElectionResult};
pub use vote_election::{VoteElectionCommand, VoteElectionHandler, VoteElectionResult};
