//! Event bus adapters.
//!
//! - `InMemoryEventBus` - Synchronous, in-process bus with capture helpers
//! - `TracingEventPublisher` - Logs each event, optionally forwarding it

mod in_memory;
mod tracing_publisher;

pub use in_memory::InMemoryEventBus;
pub use tracing_publisher::TracingEventPublisher;
