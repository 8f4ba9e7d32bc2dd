//! Foundation utilities shared across Tork crates.
//!
//! # Feature Tiers
//!
//! - `foundation` (default): error classification and the PII pattern
//!   registry. No logging, no I/O.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
/// Error foundation shared by every Tork crate.
#[cfg(feature = "foundation")]
pub mod error;
/// PII recognition.
#[cfg(feature = "foundation")]
pub mod privacy;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
#[cfg(feature = "foundation")]
pub use privacy::patterns::{DetectionMap, PatternRegistry, PatternRule, PiiError, PiiResult};
