//! Governance-specific error types.
//!
//! Every rule violation is detected before any state is touched, so a
//! returned error always means the ledger is unchanged.
//!
//! # Kind Mapping
//!
//! | Error | Code | Retryable |
//! |-------|------|-----------|
//! | Unauthorized | UNAUTHORIZED | yes (different caller) |
//! | AlreadyExists | ALREADY_EXISTS | no |
//! | NotFound | NOT_FOUND | no |
//! | InvalidState | INVALID_STATE | yes (different phase) |
//! | InsufficientApprovals | INSUFFICIENT_APPROVALS | yes (more votes) |
//! | Validation | VALIDATION_FAILED | no |
//! | Infrastructure | STORAGE_ERROR / EVENT_DELIVERY_ERROR | yes |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, ValidationError};

/// Errors returned by governance operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GovernanceError {
    /// Caller lacks the required role or is not permitted to act.
    #[error("{caller} is not authorized to {action}: {reason}")]
    Unauthorized {
        caller: MemberId,
        action: &'static str,
        reason: String,
    },

    /// Duplicate member, nomination, vote, approval, or open request.
    #[error("{entity} already exists: {key}")]
    AlreadyExists { entity: &'static str, key: String },

    /// Unknown identity, proposal id, request, or candidate index.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// Operation invoked outside its valid phase.
    #[error("cannot {action}: {reason}")]
    InvalidState { action: &'static str, reason: String },

    /// Quorum or majority not yet met.
    #[error("insufficient approvals for {subject}: {reason}")]
    InsufficientApprovals { subject: String, reason: String },

    /// Command input rejected before any state was read.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// A port (storage, event delivery) failed.
    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl GovernanceError {
    pub fn unauthorized(
        caller: &MemberId,
        action: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        GovernanceError::Unauthorized {
            caller: caller.clone(),
            action,
            reason: reason.into(),
        }
    }

    pub fn already_exists(entity: &'static str, key: impl ToString) -> Self {
        GovernanceError::AlreadyExists {
            entity,
            key: key.to_string(),
        }
    }

    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        GovernanceError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn invalid_state(action: &'static str, reason: impl Into<String>) -> Self {
        GovernanceError::InvalidState {
            action,
            reason: reason.into(),
        }
    }

    pub fn insufficient_approvals(subject: impl ToString, reason: impl Into<String>) -> Self {
        GovernanceError::InsufficientApprovals {
            subject: subject.to_string(),
            reason: reason.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        GovernanceError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            GovernanceError::Unauthorized { .. } => ErrorCode::Unauthorized,
            GovernanceError::AlreadyExists { .. } => ErrorCode::AlreadyExists,
            GovernanceError::NotFound { .. } => ErrorCode::NotFound,
            GovernanceError::InvalidState { .. } => ErrorCode::InvalidState,
            GovernanceError::InsufficientApprovals { .. } => ErrorCode::InsufficientApprovals,
            GovernanceError::Validation(_) => ErrorCode::ValidationFailed,
            GovernanceError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// Returns true if the same request may succeed later or from another caller.
    ///
    /// `NotFound` and `AlreadyExists` are permanent for a given input.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GovernanceError::Unauthorized { .. }
                | GovernanceError::InvalidState { .. }
                | GovernanceError::InsufficientApprovals { .. }
                | GovernanceError::Infrastructure(_)
        )
    }
}

impl From<DomainError> for GovernanceError {
    fn from(err: DomainError) -> Self {
        GovernanceError::Infrastructure(err.to_string())
    }
}
