//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types, event plumbing and the
//! caller context that form the vocabulary of the governance domain.

mod command;
mod errors;
mod events;
mod ids;
mod state_machine;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent};
pub use ids::{MemberId, ProposalId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
