//! Ledger repository port.
//!
//! Persists the single `GovernanceLedger` snapshot. The ledger is small and
//! always read and written whole; there are no partial updates.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::governance::GovernanceLedger;

/// Repository port for the governance ledger.
///
/// Implementations must ensure:
/// - `save` replaces the stored snapshot atomically (readers never observe
///   a torn write)
/// - `load` returns `None` until the first successful `save`
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Loads the current snapshot, if one was ever saved.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the backing store cannot be read or decoded
    async fn load(&self) -> Result<Option<GovernanceLedger>, DomainError>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, ledger: &GovernanceLedger) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn LedgerRepository) {}
}
