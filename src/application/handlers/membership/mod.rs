//! Membership command and query handlers.

mod add_member;
mod get_member;
mod remove_member;

pub use add_member::{AddMemberCommand, AddMemberHandler, AddMemberResult};
pub use get_member::{GetMemberHandler, GetMemberQuery};
pub use remove_member::{RemoveMemberCommand, RemoveMemberHandler, RemoveMemberResult};
