//! Membership domain module.
//!
//! Identities, roles, and active/removed status.
//!
//! # Module Structure
//!
//! - `role` - Closed role hierarchy
//! - `member` - Member entity (tombstoned on removal)
//! - `registry` - MembershipRegistry keyed by identity

mod member;
mod registry;
mod role;

pub use member::Member;
pub use registry::MembershipRegistry;
pub use role::Role;
