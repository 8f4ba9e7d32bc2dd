//! Governance error taxonomy

use thiserror::Error;
use tork_common::error::{CommonError, ErrorClassification, ErrorSeverity};
use tork_common::privacy::patterns::PiiError;
use tork_common::{impl_error_classification, impl_error_conversion};
use tork_domain::TorkError;

/// Errors raised while building or running a governance engine
#[derive(Debug, Error)]
pub enum GovernanceError {
    /// Failure raised through `tork-common`.
    #[error(transparent)]
    Common(#[from] CommonError),

    /// A custom pattern was rejected while building the registry.
    #[error("Pattern configuration error: {0}")]
    Pattern(#[from] PiiError),

    /// Malformed settings (unknown action, unparseable source).
    #[error("Governance configuration error: {0}")]
    Domain(#[from] TorkError),

    /// The OS entropy source could not produce a receipt id.
    #[error("Randomness unavailable for receipt id: {0}")]
    RandomnessUnavailable(String),

    /// A receipt sink refused a receipt.
    #[error("Receipt sink rejected receipt: {0}")]
    ReceiptSink(String),
}

/// Result type alias for governance operations
pub type Result<T> = std::result::Result<T, GovernanceError>;

impl_error_conversion!(GovernanceError, Common);

impl_error_classification!(GovernanceError, Common,
    Self::Pattern(e) => {
        retryable: ErrorClassification::is_retryable(e),
        severity: ErrorClassification::severity(e),
        critical: ErrorClassification::is_critical(e),
    },
    Self::Domain(_) => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::RandomnessUnavailable(_) => {
        retryable: false,  // Receipts must never fall back to weak ids
        severity: ErrorSeverity::Critical,
        critical: true,
    },
    Self::ReceiptSink(_) => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    }
);

impl GovernanceError {
    /// Offending custom pattern category, for configuration errors.
    pub fn pattern_category(&self) -> Option<&str> {
        match self {
            Self::Pattern(e) => e.category(),
            _ => None,
        }
    }
}

impl From<GovernanceError> for CommonError {
    fn from(err: GovernanceError) -> Self {
        match err {
            GovernanceError::Common(e) => e,
            GovernanceError::Pattern(e) => e.into(),
            GovernanceError::Domain(e) => CommonError::config(e.to_string()),
            GovernanceError::RandomnessUnavailable(reason) => {
                CommonError::internal_with_context(reason, "receipt id generation")
            }
            GovernanceError::ReceiptSink(reason) => {
                CommonError::io_op("record_receipt", reason)
            }
        }
    }
}
