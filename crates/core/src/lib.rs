//! # Tork Core
//!
//! PII governance business logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - The governance engine (detect, decide, redact, issue receipt)
//! - Port interfaces for randomness and receipt delivery
//! - The governance error taxonomy
//!
//! ## Architecture Principles
//! - Depends only on `tork-common` and `tork-domain`
//! - No file, network or framework code
//! - All external effects behind traits
//! - Immutable after construction, safe to share across threads

/// Governance error taxonomy.
pub mod errors;
/// Engine, ports and receipts.
pub mod governance;

pub use errors::{GovernanceError, Result};
pub use governance::ports::{sink_fn, EntropySource, FnSink, ReceiptSink};
pub use governance::receipt::{OsEntropy, ReceiptIssuer};
pub use governance::result::GovernanceResult;
pub use governance::service::GovernanceEngine;
