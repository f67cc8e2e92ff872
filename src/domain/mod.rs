//! Domain layer containing governance rules and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `membership` - Roles, members and the membership registry
//! - `promotion` - Member-to-Executive promotion requests
//! - `proposal` - Proposals, voting and execution
//! - `election` - Presidential elections
//! - `governance` - The composed ledger, its policy, errors and events

pub mod election;
pub mod foundation;
pub mod governance;
pub mod membership;
pub mod promotion;
pub mod proposal;
