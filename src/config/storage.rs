//! Ledger storage configuration

use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

use crate::adapters::storage::{InMemoryLedgerRepository, JsonFileLedgerRepository};
use crate::ports::LedgerRepository;

use super::error::ValidationError;

/// Storage configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Which ledger repository to use
    #[serde(default)]
    pub backend: StorageBackend,

    /// Snapshot file for the `json_file` backend
    pub ledger_path: Option<PathBuf>,
}

/// Ledger storage backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Process-local, lost on restart
    #[default]
    Memory,
    /// JSON snapshot written atomically to `ledger_path`
    JsonFile,
}

impl StorageConfig {
    /// Build the configured repository
    pub fn repository(&self) -> Result<Arc<dyn LedgerRepository>, ValidationError> {
        match self.backend {
            StorageBackend::Memory => Ok(Arc::new(InMemoryLedgerRepository::new())),
            StorageBackend::JsonFile => {
                let path = self
                    .ledger_path
                    .as_ref()
                    .ok_or(ValidationError::MissingRequired("storage.ledger_path"))?;
                Ok(Arc::new(JsonFileLedgerRepository::new(path)))
            }
        }
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::JsonFile && self.ledger_path.is_none() {
            return Err(ValidationError::MissingRequired("storage.ledger_path"));
        }
        Ok(())
    }
}
