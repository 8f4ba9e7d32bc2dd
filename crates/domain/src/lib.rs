//! # Tork Domain
//!
//! Governance domain types and models for Tork.
//!
//! This crate contains:
//! - Policy actions and audit receipts
//! - Engine and middleware configuration structures
//! - Domain error types and Result definitions
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Tork crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

/// Engine and middleware settings.
pub mod config;
/// Shared literals.
pub mod constants;
/// Domain error type.
pub mod errors;
/// Enum string-conversion macro.
pub mod macros;
/// Actions and receipts.
pub mod types;
/// Helpers used by the domain types.
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
