//! Content governance domain

/// Entropy and receipt sink traits.
pub mod ports;
/// Receipt issuing.
pub mod receipt;
/// Redaction tokens.
pub mod redaction;
/// Per-call result.
pub mod result;
/// The engine.
pub mod service;

pub use ports::*;
pub use result::GovernanceResult;
pub use service::GovernanceEngine;
