//! Event publisher that writes every event to the tracing pipeline.
//!
//! Useful as the default sink for embedded deployments where the host only
//! needs an audit trail, and as an outer layer around another publisher.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Logs each envelope at `info` and optionally forwards it.
#[derive(Default)]
pub struct TracingEventPublisher {
    inner: Option<Arc<dyn EventPublisher>>,
}

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Logs, then delegates delivery to `inner`.
    pub fn wrapping(inner: Arc<dyn EventPublisher>) -> Self {
        Self { inner: Some(inner) }
    }
}

#[async_trait]
impl EventPublisher for TracingEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::info!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            aggregate_type = %event.aggregate_type,
            aggregate_id = %event.aggregate_id,
            caller = event.metadata.caller.as_deref().unwrap_or("-"),
            correlation_id = event.metadata.correlation_id.as_deref().unwrap_or("-"),
            payload = %event.payload,
            "governance event"
        );

        match &self.inner {
            Some(inner) => inner.publish(event).await,
            None => Ok(()),
        }
    }
}
