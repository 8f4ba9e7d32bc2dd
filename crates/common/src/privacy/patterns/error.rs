use thiserror::Error;

use crate::error::{CommonError, ErrorSeverity};
use crate::{impl_error_classification, impl_error_conversion};

/// Errors raised while building a pattern registry
#[derive(Debug, Error)]
pub enum PiiError {
    /// Shared configuration or serialization failure.
    #[error(transparent)]
    Common(#[from] CommonError),

    /// A custom pattern did not compile as a regular expression.
    #[error("Invalid pattern for category '{name}': {reason}")]
    InvalidPattern {
        /// Category the pattern was registered under.
        name: String,
        /// Compiler message or rejection reason.
        reason: String,
    },

    /// A custom pattern was registered under an unusable category name.
    #[error("Invalid pattern category name: {0:?}")]
    InvalidPatternName(String),
}

/// Result alias for registry construction.
pub type PiiResult<T> = Result<T, PiiError>;

// Auto-convert std types via CommonError
impl_error_conversion!(PiiError, Common);

impl_error_classification!(PiiError, Common,
    Self::InvalidPattern { .. } => {
        retryable: false,  // Compilation errors are permanent
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::InvalidPatternName(_) => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    }
);

impl PiiError {
    pub(crate) fn invalid_pattern(name: &str, err: &regex::Error) -> Self {
        Self::InvalidPattern { name: name.to_string(), reason: err.to_string() }
    }

    /// Category name the error refers to, if any.
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::InvalidPattern { name, .. } => Some(name),
            Self::InvalidPatternName(name) => Some(name),
            Self::Common(_) => None,
        }
    }
}

impl From<PiiError> for CommonError {
    fn from(err: PiiError) -> Self {
        match err {
            PiiError::Common(e) => e,
            PiiError::InvalidPattern { name, reason } => {
                CommonError::config_field(format!("custom_patterns.{}", name), reason)
            }
            PiiError::InvalidPatternName(name) => CommonError::config_field(
                "custom_patterns",
                format!("invalid category name {:?}", name),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorClassification;

    #[test]
    fn invalid_pattern_is_permanent_error() {
        let err = PiiError::InvalidPattern { name: "CUSTOM".into(), reason: "unclosed group".into() };
        assert!(!err.is_retryable());
        assert!(!err.is_critical());
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(err.category(), Some("CUSTOM"));
        assert_eq!(err.to_string(), "Invalid pattern for category 'CUSTOM': unclosed group");
    }

    #[test]
    fn converts_into_common_config_error() {
        let err = PiiError::InvalidPattern { name: "EMP_ID".into(), reason: "bad".into() };
        let common: CommonError = err.into();
        assert_eq!(
            common,
            CommonError::config_field("custom_patterns.EMP_ID", "bad")
        );
    }

    #[test]
    fn common_variant_delegates_classification() {
        let err = PiiError::from(CommonError::internal("boom"));
        assert!(err.is_critical());
        assert_eq!(err.category(), None);
    }
}
