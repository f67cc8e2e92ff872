//! Ledger storage adapters.
//!
//! Implementations of the `LedgerRepository` port.
//!
//! - **InMemoryLedgerRepository** - Keeps the snapshot in memory (tests, embedding)
//! - **JsonFileLedgerRepository** - Stores the snapshot as a JSON file on disk
//!
//! ```ignore
//! use adapters::storage::{InMemoryLedgerRepository, JsonFileLedgerRepository};
//!
//! let repo = JsonFileLedgerRepository::new("./data/ledger.json");
//! let repo = InMemoryLedgerRepository::new();
//! ```

mod in_memory_ledger;
mod json_file_ledger;

pub use in_memory_ledger::InMemoryLedgerRepository;
pub use json_file_ledger::JsonFileLedgerRepository;
