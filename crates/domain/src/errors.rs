//! Error types used throughout the domain

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Tork domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TorkError {
    /// Malformed setting: bad action, unparseable file or env value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller supplied an unusable value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON or TOML encoding failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TorkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for Tork domain operations
pub type Result<T> = std::result::Result<T, TorkError>;
