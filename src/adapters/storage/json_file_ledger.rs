//! JSON file ledger repository.
//!
//! Stores the snapshot as pretty-printed JSON in a single file. Writes go to
//! a sibling `.tmp` file that is then renamed over the target, so a crash
//! mid-write leaves the previous snapshot intact.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::governance::GovernanceLedger;
use crate::ports::LedgerRepository;

#[derive(Debug, Clone)]
pub struct JsonFileLedgerRepository {
    path: PathBuf,
}

impl JsonFileLedgerRepository {
    /// # Example
    /// ```ignore
    /// let repo = JsonFileLedgerRepository::new("./data/ledger.json");
    /// ```
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(action: &str, path: &Path, e: impl std::fmt::Display) -> DomainError {
        DomainError::new(ErrorCode::StorageError, format!("Failed to {}: {}", action, e))
            .with_detail("path", path.display().to_string())
    }
}

#[async_trait]
impl LedgerRepository for JsonFileLedgerRepository {
    async fn load(&self) -> Result<Option<GovernanceLedger>, DomainError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::storage_error("read ledger", &self.path, e)),
        };

        let ledger = serde_json::from_str(&json)
            .map_err(|e| Self::storage_error("decode ledger", &self.path, e))?;
        Ok(Some(ledger))
    }

    async fn save(&self, ledger: &GovernanceLedger) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::storage_error("create directory", parent, e))?;
        }

        let json = serde_json::to_string_pretty(ledger)
            .map_err(|e| Self::storage_error("encode ledger", &self.path, e))?;

        // Write to temp file first, then rename (atomic on most filesystems)
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json)
            .await
            .map_err(|e| Self::storage_error("write ledger", &temp_path, e))?;

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Self::storage_error("rename ledger", &self.path, e))?;

        tracing::debug!(path = %self.path.display(), "ledger snapshot written");
        Ok(())
    }
}
