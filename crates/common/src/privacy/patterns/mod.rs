//! PII Pattern Detection - Portable Core
//!
//! A [`PatternRegistry`] is an ordered set of named [`PatternRule`]s. It is
//! built once from the [`builtin`] categories plus caller-supplied overrides
//! and is read-only afterwards, so a single registry can be scanned from any
//! number of threads.

/// Built-in categories and their patterns.
pub mod builtin;
/// Scan results.
pub mod detection;
/// Registry construction errors.
pub mod error;
/// Named rules and the ordered registry.
pub mod registry;

// Re-export commonly used types
pub use builtin::{BUILTIN_PATTERNS, CREDIT_CARD, EMAIL, IP_ADDRESS, PHONE, SSN};
pub use detection::DetectionMap;
pub use error::{PiiError, PiiResult};
pub use registry::{PatternRegistry, PatternRule};
