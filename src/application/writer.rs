//! GovernanceWriter - single-writer coordinator for the ledger.
//!
//! Every mutating operation runs under one async mutex:
//!
//! 1. read `now` from the clock (once)
//! 2. load the ledger snapshot and clone it
//! 3. apply the domain operation to the clone
//! 4. save the clone
//! 5. publish the resulting event
//!
//! If publishing fails after the save, the previous snapshot is saved back
//! and the delivery error is returned, so a persisted change never exists
//! without its event. Reads take the same mutex and never observe a
//! half-applied operation.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::foundation::{
    CommandMetadata, MemberId, SerializableDomainEvent, Timestamp,
};
use crate::domain::governance::{
    GovernanceError, GovernanceEvent, GovernanceLedger, GovernancePolicy,
};
use crate::ports::{Clock, EventPublisher, LedgerRepository};

/// Outcome of [`GovernanceWriter::bootstrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerBootstrap {
    /// No snapshot existed; a new organization was founded.
    Founded,
    /// An existing snapshot was found and kept.
    Resumed,
}

pub struct GovernanceWriter {
    repository: Arc<dyn LedgerRepository>,
    publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    lock: Mutex<()>,
}

impl GovernanceWriter {
    pub fn new(
        repository: Arc<dyn LedgerRepository>,
        publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            publisher,
            clock,
            lock: Mutex::new(()),
        }
    }

    /// Founds the organization with `founder` as President, or resumes the
    /// stored ledger.
    ///
    /// On resume the configured `policy` replaces the stored one, so policy
    /// changes take effect on restart. The founder argument is ignored then.
    pub async fn bootstrap(
        &self,
        founder: MemberId,
        policy: GovernancePolicy,
    ) -> Result<LedgerBootstrap, GovernanceError> {
        let _guard = self.lock.lock().await;

        match self.repository.load().await? {
            Some(mut ledger) => {
                if ledger.policy() != &policy {
                    ledger.set_policy(policy)?;
                    self.repository.save(&ledger).await?;
                    tracing::info!(?policy, "governance policy updated from configuration");
                }
                tracing::info!(
                    members = ledger.registry().active_member_count(),
                    proposals = ledger.proposal_count(),
                    "governance ledger resumed"
                );
                Ok(LedgerBootstrap::Resumed)
            }
            None => {
                let now = self.clock.now();
                let ledger = GovernanceLedger::found(founder.clone(), policy, now)?;
                self.repository.save(&ledger).await?;
                tracing::info!(founder = %founder, "governance ledger founded");
                Ok(LedgerBootstrap::Founded)
            }
        }
    }

    /// Applies one mutating operation atomically and publishes its event.
    ///
    /// `operation` names the call in logs. The closure receives the working
    /// copy of the ledger, the caller from `metadata`, and the instant read
    /// from the clock.
    pub async fn execute<F>(
        &self,
        operation: &'static str,
        metadata: &CommandMetadata,
        apply: F,
    ) -> Result<GovernanceEvent, GovernanceError>
    where
        F: FnOnce(&mut GovernanceLedger, &MemberId, Timestamp) -> Result<GovernanceEvent, GovernanceError>
            + Send,
    {
        let _guard = self.lock.lock().await;
        let now = self.clock.now();
        let caller = &metadata.caller;

        let previous = self.load_ledger().await?;
        let mut next = previous.clone();

        let event = match apply(&mut next, caller, now) {
            Ok(event) => event,
            Err(err) => {
                tracing::debug!(
                    operation,
                    caller = %caller,
                    code = %err.code(),
                    error = %err,
                    "governance operation rejected"
                );
                return Err(err);
            }
        };

        let mut envelope = event
            .to_envelope()
            .map_err(|e| GovernanceError::infrastructure(format!("event encoding failed: {}", e)))?
            .with_correlation_id(metadata.correlation_id())
            .with_caller(caller.as_str());
        if let Some(trace_id) = metadata.trace_id() {
            envelope = envelope.with_trace_id(trace_id);
        }
        let event_type = envelope.event_type.clone();

        self.repository.save(&next).await?;

        if let Err(err) = self.publisher.publish(envelope).await {
            tracing::warn!(
                operation,
                caller = %caller,
                event_type = %event_type,
                error = %err,
                "event delivery failed; restoring previous ledger"
            );
            if let Err(restore_err) = self.repository.save(&previous).await {
                tracing::error!(
                    operation,
                    error = %restore_err,
                    "failed to restore ledger after event delivery failure"
                );
            }
            return Err(err.into());
        }

        tracing::info!(
            operation,
            caller = %caller,
            event_type = %event_type,
            "governance operation applied"
        );
        Ok(event)
    }

    /// Runs a read-only query against a consistent snapshot.
    pub async fn read<T, F>(&self, query: F) -> Result<T, GovernanceError>
    where
        F: FnOnce(&GovernanceLedger) -> Result<T, GovernanceError> + Send,
    {
        let _guard = self.lock.lock().await;
        let ledger = self.load_ledger().await?;
        query(&ledger)
    }

    async fn load_ledger(&self) -> Result<GovernanceLedger, GovernanceError> {
        self.repository.load().await?.ok_or_else(|| {
            GovernanceError::invalid_state("access the ledger", "organization has not been founded")
        })
    }
}
