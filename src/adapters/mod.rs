//! Adapters - Implementations of the port interfaces.
//!
//! - `clock` - System and manual clocks
//! - `events` - In-memory bus and tracing publisher
//! - `storage` - In-memory and JSON-file ledger repositories

pub mod clock;
pub mod events;
pub mod storage;
