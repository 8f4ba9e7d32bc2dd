//! Tracing subscriber initialisation
//!
//! The engine and adapters only emit `tracing` events; binaries embedding
//! them call [`init_tracing`] once at startup to decide where those events
//! go. Filtering follows `RUST_LOG` and defaults to `info`.

use tork_domain::{impl_domain_enum_conversions, Result, TorkError};
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Output format of the fmt subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl_domain_enum_conversions!(LogFormat {
    Pretty => "pretty",
    Json => "json",
});

/// Install the global subscriber, filtered by `RUST_LOG`.
///
/// # Errors
/// Returns `TorkError::Config` if a global subscriber is already set.
pub fn init_tracing(format: LogFormat) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(format, filter)
}

/// Install the global subscriber with an explicit filter directive.
///
/// # Errors
/// Returns `TorkError::Config` if the directive does not parse or a global
/// subscriber is already set.
pub fn init_tracing_with_filter(format: LogFormat, directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| TorkError::Config(format!("Invalid log filter {:?}: {}", directive, e)))?;
    install(format, filter)
}

fn install(format: LogFormat, filter: EnvFilter) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = match format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| TorkError::Config(format!("Failed to install tracing subscriber: {}", e)))
}
