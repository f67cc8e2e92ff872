//! Governance ledger - the composition of all governance components.
//!
//! - `errors` - GovernanceError and its mapping onto shared error codes
//! - `events` - GovernanceEvent, one per successful mutating operation
//! - `policy` - GovernancePolicy (threshold, quorum, tie-break)
//! - `ledger` - GovernanceLedger, the single persisted aggregate

mod errors;
mod events;
mod ledger;
mod policy;

pub use errors::GovernanceError;
pub use events::GovernanceEvent;
pub use ledger::GovernanceLedger;
pub use policy::GovernancePolicy;
