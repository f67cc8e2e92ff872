//! Governance Ledger - role-based organizational governance
//!
//! Tracks membership with Member, Executive and President roles, multi-approval
//! promotions, yes/no proposals executed by the President, and timed leadership
//! elections. Every accepted operation emits exactly one event and every
//! rejected one leaves the ledger unchanged.
//!
//! Hosts drive the system through the command and query handlers in
//! [`application::handlers`], which share a single [`application::GovernanceWriter`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
