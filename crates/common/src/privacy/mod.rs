//! Privacy Module - Portable Core
//!
//! Pattern-based PII recognition: the built-in category set, the ordered
//! registry that custom rules merge into, and the detection map it produces.

/// Pattern-based PII detection.
pub mod patterns;

// Re-export commonly used types
pub use patterns::{DetectionMap, PatternRegistry, PatternRule, PiiError, PiiResult};
