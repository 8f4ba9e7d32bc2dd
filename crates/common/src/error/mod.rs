//! Common error types and utilities shared by the Tork crates
//!
//! The error handling system is built on three pieces:
//!
//! 1. **`CommonError`**: the error patterns that show up in more than one
//!    crate (configuration, serialization, I/O, internal faults).
//! 2. **`ErrorClassification`**: a standard interface for classifying errors
//!    by retryability, severity and criticality.
//! 3. **`ErrorSeverity`**: a unified severity scale for monitoring.
//!
//! Module-specific errors **compose** with `CommonError` rather than
//! duplicating its variants:
//!
//! ```rust,ignore
//! #[derive(Debug, thiserror::Error)]
//! pub enum RegistryError {
//!     #[error("Invalid pattern for '{name}': {reason}")]
//!     InvalidPattern { name: String, reason: String },
//!
//!     #[error(transparent)]
//!     Common(#[from] CommonError),
//! }
//!
//! impl_error_classification!(RegistryError, Common,
//!     Self::InvalidPattern { .. } => {
//!         retryable: false,
//!         severity: ErrorSeverity::Error,
//!         critical: false,
//!     }
//! );
//! ```
//!
//! | Level | Use Case |
//! |-------|----------|
//! | **Info** | Expected conditions, nothing to act on |
//! | **Warning** | Degraded but operational (receipt hand-off failed) |
//! | **Error** | Failure requiring attention (bad config, invalid input) |
//! | **Critical** | Audit or integrity guarantees at risk |

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Standard result type using CommonError
pub type CommonResult<T> = Result<T, CommonError>;

/// Failure modes shared by the registry, the engine and the adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommonError {
    /// Settings or custom patterns that cannot be used
    #[error("Configuration error{}: {message}", field_suffix(.field))]
    Config {
        /// What is wrong.
        message: String,
        /// Offending key, when known.
        field: Option<String>,
    },

    /// JSON/TOML encoding or decoding failed
    #[error("Serialization error ({format}): {message}")]
    Serialization {
        /// Underlying parser or encoder message.
        message: String,
        /// Format name, e.g. `JSON`.
        format: String,
    },

    /// Reading a config file or handing off a receipt failed
    #[error("I/O error{}: {message}", operation_suffix(.operation))]
    Io {
        /// Underlying error message.
        message: String,
        /// Operation that failed, when known.
        operation: Option<String>,
    },

    /// Broken invariant; the governance guarantee cannot be upheld
    #[error("Internal error{}: {message}", context_suffix(.context))]
    Internal {
        /// What broke.
        message: String,
        /// Where it broke, when known.
        context: Option<String>,
    },
}

fn field_suffix(field: &Option<String>) -> String {
    field.as_ref().map(|f| format!(" in field '{}'", f)).unwrap_or_default()
}

fn operation_suffix(operation: &Option<String>) -> String {
    operation.as_ref().map(|op| format!(" during '{}'", op)).unwrap_or_default()
}

fn context_suffix(context: &Option<String>) -> String {
    context.as_ref().map(|ctx| format!(" in '{}'", ctx)).unwrap_or_default()
}

impl ErrorClassification for CommonError {
    fn is_retryable(&self) -> bool {
        // A failed receipt hand-off may succeed once the receiver recovers.
        matches!(self, Self::Io { .. })
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io { .. } => ErrorSeverity::Warning,
            Self::Config { .. } | Self::Serialization { .. } => ErrorSeverity::Error,
            Self::Internal { .. } => ErrorSeverity::Critical,
        }
    }

    fn is_critical(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

impl CommonError {
    /// Configuration error not tied to a single key
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into(), field: None }
    }

    /// Configuration error for one key, e.g. `custom_patterns.EMPLOYEE_ID`
    pub fn config_field<S: Into<String>, F: Into<String>>(field: F, message: S) -> Self {
        Self::Config { message: message.into(), field: Some(field.into()) }
    }

    /// Serialization error in `format` (e.g. `JSON`, `TOML`).
    pub fn serialization<S: Into<String>, F: Into<String>>(format: F, message: S) -> Self {
        Self::Serialization { message: message.into(), format: format.into() }
    }

    /// I/O error raised by `operation`.
    pub fn io_op<S: Into<String>, O: Into<String>>(operation: O, message: S) -> Self {
        Self::Io { message: message.into(), operation: Some(operation.into()) }
    }

    /// Internal invariant violation.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal { message: message.into(), context: None }
    }

    /// Internal invariant violation with extra context.
    pub fn internal_with_context<S: Into<String>, C: Into<String>>(message: S, context: C) -> Self {
        Self::Internal { message: message.into(), context: Some(context.into()) }
    }

    /// Short machine-readable kind for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Serialization { .. } => "serialization",
            Self::Io { .. } => "io",
            Self::Internal { .. } => "internal",
        }
    }
}

/// Error classification trait for consistent error handling across crates
///
/// Adapters use it to decide how to fail a request pipeline: a critical
/// error must abort, never pass ungoverned content through.
pub trait ErrorClassification {
    /// Check if this error is retryable
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    ///
    /// Critical errors indicate the audit guarantee itself is at risk (for
    /// example, receipt identifiers cannot be generated).
    fn is_critical(&self) -> bool;

    /// Get the suggested retry delay if applicable
    fn retry_after(&self) -> Option<Duration>;
}

/// Error severity levels for monitoring and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, should be monitored but not critical
    Warning,
    /// Error, requires attention and action
    Error,
    /// Critical, immediate action required
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl From<serde_json::Error> for CommonError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON", err.to_string())
    }
}

impl From<std::io::Error> for CommonError {
    fn from(err: std::io::Error) -> Self {
        Self::Io { message: err.to_string(), operation: None }
    }
}

/// Utility macro for creating error conversions from std types
///
/// `From<CommonError>` is normally handled by `#[from]` on the variant:
///
/// ```rust,ignore
/// #[derive(Debug, thiserror::Error)]
/// pub enum MyError {
///     #[error(transparent)]
///     Common(#[from] CommonError),
/// }
///
/// impl_error_conversion!(MyError, Common);
/// ```
///
/// This generates `From<serde_json::Error>` and `From<std::io::Error>`, both
/// routed through `CommonError`. Use the `with_common` form when the variant
/// has no `#[from]`.
#[macro_export]
macro_rules! impl_error_conversion {
    ($error_type:ty, $variant:ident) => {
        impl From<serde_json::Error> for $error_type {
            fn from(err: serde_json::Error) -> Self {
                Self::$variant($crate::error::CommonError::from(err))
            }
        }

        impl From<std::io::Error> for $error_type {
            fn from(err: std::io::Error) -> Self {
                Self::$variant($crate::error::CommonError::from(err))
            }
        }
    };

    ($error_type:ty, $variant:ident, with_common) => {
        impl From<$crate::error::CommonError> for $error_type {
            fn from(err: $crate::error::CommonError) -> Self {
                Self::$variant(err)
            }
        }

        $crate::impl_error_conversion!($error_type, $variant);
    };
}

/// Macro to implement ErrorClassification by delegating to CommonError
///
/// Every variant other than the embedded `CommonError` must be listed with its
/// classification:
///
/// ```rust,ignore
/// impl_error_classification!(PiiError, Common,
///     Self::InvalidPattern { .. } => {
///         retryable: false,
///         severity: ErrorSeverity::Error,
///         critical: false,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_error_classification {
    (
        $error_type:ty,
        $common_variant:ident
        $(,
            $variant:pat => {
                retryable: $retryable:expr,
                severity: $severity:expr,
                critical: $critical:expr
                $(, retry_after: $retry_after:expr)?
                $(,)?
            }
        )*
        $(,)?
    ) => {
        impl $crate::error::ErrorClassification for $error_type {
            fn is_retryable(&self) -> bool {
                match self {
                    Self::$common_variant(e) => $crate::error::ErrorClassification::is_retryable(e),
                    $(
                        $variant => $retryable,
                    )*
                }
            }

            fn severity(&self) -> $crate::error::ErrorSeverity {
                match self {
                    Self::$common_variant(e) => $crate::error::ErrorClassification::severity(e),
                    $(
                        $variant => $severity,
                    )*
                }
            }

            fn is_critical(&self) -> bool {
                match self {
                    Self::$common_variant(e) => $crate::error::ErrorClassification::is_critical(e),
                    $(
                        $variant => $critical,
                    )*
                }
            }

            fn retry_after(&self) -> Option<std::time::Duration> {
                match self {
                    Self::$common_variant(e) => $crate::error::ErrorClassification::retry_after(e),
                    $(
                        $(
                            $variant => $retry_after,
                        )?
                    )*
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }
        }
    };
}
