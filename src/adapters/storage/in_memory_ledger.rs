//! In-memory ledger repository.
//!
//! Keeps the snapshot in process memory. Useful for tests, simulations and
//! hosts that persist the ledger themselves.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::governance::GovernanceLedger;
use crate::ports::LedgerRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryLedgerRepository {
    snapshot: Arc<RwLock<Option<GovernanceLedger>>>,
    saves: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl InMemoryLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an existing snapshot, as if it had been saved earlier.
    pub fn with_ledger(ledger: GovernanceLedger) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(Some(ledger))),
            ..Self::default()
        }
    }

    /// Number of successful saves (useful for tests).
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// While set, every save is rejected and the snapshot is left as is.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl LedgerRepository for InMemoryLedgerRepository {
    async fn load(&self) -> Result<Option<GovernanceLedger>, DomainError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, ledger: &GovernanceLedger) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                "in-memory repository is rejecting writes",
            ));
        }
        *self.snapshot.write().await = Some(ledger.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MemberId, Timestamp};
    use crate::domain::governance::GovernancePolicy;

    fn ledger() -> GovernanceLedger {
        GovernanceLedger::found(
            MemberId::new("founder").unwrap(),
            GovernancePolicy::default(),
            Timestamp::epoch(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn load_is_empty_until_saved() {
        let repo = InMemoryLedgerRepository::new();
        assert!(repo.load().await.unwrap().is_none());

        repo.save(&ledger()).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), Some(ledger()));
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn clones_share_the_snapshot() {
        let repo = InMemoryLedgerRepository::new();
        let other = repo.clone();

        repo.save(&ledger()).await.unwrap();

        assert!(other.load().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn failing_save_keeps_previous_snapshot() {
        let repo = InMemoryLedgerRepository::with_ledger(ledger());
        let mut changed = ledger();
        changed
            .add_member(MemberId::new("alice").unwrap(), Timestamp::epoch())
            .unwrap();
        repo.set_failing(true);

        let err = repo.save(&changed).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(repo.load().await.unwrap(), Some(ledger()));
    }
}
