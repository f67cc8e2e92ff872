//! EventPublisher port - Interface for publishing governance events.
//!
//! This port defines how governance events leave the ledger without knowing
//! about the underlying transport (in-memory bus, log sink, message broker).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Events are delivered in the order they are published
/// - Errors are propagated to the caller, which rolls back the operation
/// - An event that fails delivery is not recorded as published
///
/// # Example
///
/// ```ignore
/// let envelope = event.to_envelope()?.with_caller(caller.as_str());
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events in order, stopping at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
