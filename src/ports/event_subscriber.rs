//! EventSubscriber port - Interface for reacting to governance events.
//!
//! Hosts register handlers for the event types they care about (for example
//! acting on `governance.proposal_executed.v1`) without knowing which bus
//! delivers them.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// # Example
///
/// ```ignore
/// struct TreasuryExecutor { /* ... */ }
///
/// #[async_trait]
/// impl EventHandler for TreasuryExecutor {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         let executed: GovernanceEvent = event.payload_as()?;
///         // Carry out the approved proposal...
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "TreasuryExecutor"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging and error messages.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events.
pub trait EventSubscriber: Send + Sync {
    /// Subscribe handler to a specific event type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe handler to multiple event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// Combined trait for event bus implementations.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}
