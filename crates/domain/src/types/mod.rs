//! Domain types and models

/// Policy actions.
pub mod action;
/// Audit receipts.
pub mod receipt;

pub use action::Action;
pub use receipt::GovernanceReceipt;
