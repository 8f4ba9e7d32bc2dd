//! Domain constants
//!
//! Centralized location for the literals shared by the engine, the receipt
//! format and the configuration loader.

// Receipt identifiers
/// Every receipt id starts with this.
pub const RECEIPT_ID_PREFIX: &str = "tork_";
/// OS random bytes hex-encoded into a receipt id.
pub const RECEIPT_ID_RANDOM_BYTES: usize = 16;
/// Prefix plus two hex characters per random byte.
pub const RECEIPT_ID_LEN: usize = RECEIPT_ID_PREFIX.len() + RECEIPT_ID_RANDOM_BYTES * 2;

// Policy defaults
/// Policy version stamped on receipts when none is configured.
pub const DEFAULT_POLICY_VERSION: &str = "1.0.0";

// Redaction token: `[<CATEGORY>_REDACTED]`
/// Opens a redaction token.
pub const REDACTION_TOKEN_OPEN: &str = "[";
/// Closes a redaction token after the category name.
pub const REDACTION_TOKEN_SUFFIX: &str = "_REDACTED]";

// Environment variables read by the configuration loader
/// `allow`, `redact` or `deny`.
pub const ENV_DEFAULT_ACTION: &str = "TORK_DEFAULT_ACTION";
/// Policy version string.
pub const ENV_POLICY_VERSION: &str = "TORK_POLICY_VERSION";
/// JSON object of category name to pattern source.
pub const ENV_CUSTOM_PATTERNS: &str = "TORK_CUSTOM_PATTERNS";
/// Bool toggling request governing.
pub const ENV_GOVERN_INPUT: &str = "TORK_GOVERN_INPUT";
/// Bool toggling response governing.
pub const ENV_GOVERN_OUTPUT: &str = "TORK_GOVERN_OUTPUT";
/// Bool toggling request body governing.
pub const ENV_GOVERN_BODY: &str = "TORK_GOVERN_BODY";

/// Table name a shared configuration file may nest settings under.
pub const CONFIG_TABLE: &str = "tork";
