//! Pure helper functions shared by domain types

/// Receipt timestamp format.
pub mod timestamp;
