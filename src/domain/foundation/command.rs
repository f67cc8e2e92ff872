//! Command infrastructure for CQRS handlers.
//!
//! `CommandMetadata` is the caller context that flows through every command
//! and query. The host resolves who is invoking the operation and the core
//! trusts that identity verbatim; no authentication happens here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MemberId;

/// Metadata context for command handlers.
///
/// Carries the invoking principal plus correlation context. Handlers read
/// the caller once per operation and propagate the rest to emitted events.
///
/// # Example
///
/// ```ignore
/// let metadata = CommandMetadata::new(caller).with_correlation_id("req-42");
/// let result = handler.handle(cmd, metadata).await?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The principal executing this command (used for authorization).
    pub caller: MemberId,

    /// Links related operations across a single host request.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Distributed tracing span/trace ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,

    /// Source of this command (e.g., "api", "scheduler", "test").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata with the required caller.
    pub fn new(caller: MemberId) -> Self {
        Self {
            caller,
            correlation_id: None,
            trace_id: None,
            source: None,
        }
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add trace ID for distributed tracing.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the correlation ID only if explicitly set.
    pub fn correlation_id_opt(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Returns the trace ID if set.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
