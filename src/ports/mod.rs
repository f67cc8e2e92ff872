//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the governance domain and the outside world. Adapters implement these ports.
//!
//! - `Clock` - Source of the current time
//! - `EventPublisher` - Sink for governance events
//! - `EventSubscriber` / `EventHandler` - Host-side reactions to events
//! - `LedgerRepository` - Persistence of the ledger snapshot
//!
//! The caller context is not a port: it travels with every command as
//! `CommandMetadata` and is trusted verbatim.

mod clock;
mod event_publisher;
mod event_subscriber;
mod ledger_repository;

pub use clock::Clock;
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use ledger_repository::LedgerRepository;
