//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GOVERNANCE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use governance_ledger::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let policy = config.governance.policy();
//! println!("Promotions need {} approvals", policy.promotion_approval_threshold);
//! ```

mod error;
mod governance;
mod logging;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use governance::{GovernanceConfig, QuorumMode};
pub use logging::LoggingConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults except `governance.founder`, which
/// [`AppConfig::validate()`] requires.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Governance policy and founder identity
    #[serde(default)]
    pub governance: GovernanceConfig,

    /// Ledger persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GOVERNANCE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GOVERNANCE__GOVERNANCE__FOUNDER=0xabc` -> `governance.founder = "0xabc"`
    /// - `GOVERNANCE__STORAGE__BACKEND=json_file` -> `storage.backend = JsonFile`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GOVERNANCE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.governance.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::election::TieBreak;
    use crate::domain::proposal::ParticipationQuorum;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "GOVERNANCE__GOVERNANCE__FOUNDER",
        "GOVERNANCE__GOVERNANCE__PROMOTION_APPROVAL_THRESHOLD",
        "GOVERNANCE__GOVERNANCE__QUORUM_MODE",
        "GOVERNANCE__GOVERNANCE__TIE_BREAK",
        "GOVERNANCE__STORAGE__BACKEND",
        "GOVERNANCE__STORAGE__LEDGER_PATH",
        "GOVERNANCE__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert!(config.governance.founder.is_none());
        assert_eq!(config.governance.promotion_approval_threshold, 1);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(!config.logging.json);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GOVERNANCE__GOVERNANCE__FOUNDER", "0xfounder");
        env::set_var("GOVERNANCE__GOVERNANCE__PROMOTION_APPROVAL_THRESHOLD", "2");
        env::set_var("GOVERNANCE__GOVERNANCE__QUORUM_MODE", "majority_of_active");
        env::set_var("GOVERNANCE__GOVERNANCE__TIE_BREAK", "latest_nominated");
        env::set_var("GOVERNANCE__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());

        let policy = config.governance.policy();
        assert_eq!(policy.promotion_approval_threshold, 2);
        assert_eq!(policy.participation_quorum, ParticipationQuorum::MajorityOfActive);
        assert_eq!(policy.tie_break, TieBreak::LatestNominated);
        assert!(config.logging.json);
    }

    #[test]
    fn test_json_file_backend_needs_path() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GOVERNANCE__GOVERNANCE__FOUNDER", "0xfounder");
        env::set_var("GOVERNANCE__STORAGE__BACKEND", "json_file");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.ledger_path"))
        ));
    }

    #[test]
    fn test_json_file_backend_with_path() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GOVERNANCE__GOVERNANCE__FOUNDER", "0xfounder");
        env::set_var("GOVERNANCE__STORAGE__BACKEND", "json_file");
        env::set_var("GOVERNANCE__STORAGE__LEDGER_PATH", "/var/lib/governance/ledger.json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.storage.ledger_path.as_deref(),
            Some(std::path::Path::new("/var/lib/governance/ledger.json"))
        );
    }
}
