//! # Tork Infrastructure
//!
//! Adapters around the governance engine in `tork-core`.
//!
//! This crate contains:
//! - Configuration loading (`.env`, TOML/JSON files, environment variables)
//! - A framework-agnostic payload governor for request/response bodies
//! - Tracing subscriber initialisation
//!
//! ## Architecture
//! - Depends on `tork-domain` and `tork-core`
//! - Contains all "impure" code (environment, filesystem, global subscriber)
//! - No detection logic of its own

/// Settings from files and the environment.
pub mod config;
/// Request and response payload governing.
pub mod middleware;
/// Tracing setup.
pub mod observability;

// Re-export commonly used items
pub use config::{load, load_from_env, load_from_file, probe_config_paths};
pub use middleware::{Body, GovernanceReport, PayloadGovernor, RequestPayload, ResponsePayload};
pub use observability::{init_tracing, LogFormat};
