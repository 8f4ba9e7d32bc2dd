//! Configuration loader
//!
//! Loads governance settings from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the process environment, if one exists
//! 2. Starts from defaults, or from the first config file found by
//!    [`probe_config_paths`]
//! 3. Applies environment variable overrides on top
//!
//! Loading never builds an engine. Pattern sources are only validated when
//! the settings are handed to `GovernanceEngine::new`.
//!
//! ## Environment Variables
//! - `TORK_DEFAULT_ACTION`: `allow`, `redact` or `deny` (case-insensitive)
//! - `TORK_POLICY_VERSION`: version string stamped on receipts
//! - `TORK_CUSTOM_PATTERNS`: JSON object of `name -> pattern source`
//! - `TORK_GOVERN_INPUT`: govern query strings and request bodies
//! - `TORK_GOVERN_OUTPUT`: govern response bodies
//! - `TORK_GOVERN_BODY`: govern request bodies (with `TORK_GOVERN_INPUT`)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./tork.toml` or `./tork.json` (current working directory)
//! 2. `./config/tork.toml` or `./config/tork.json`
//! 3. `../tork.toml` or `../tork.json` (parent directory)
//! 4. Relative to executable location
//!
//! A file may hold the settings at its top level or nested under a `tork`
//! table, so the section can live inside a larger application config.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;
use tork_domain::constants::{
    CONFIG_TABLE, ENV_CUSTOM_PATTERNS, ENV_DEFAULT_ACTION, ENV_GOVERN_BODY, ENV_GOVERN_INPUT,
    ENV_GOVERN_OUTPUT, ENV_POLICY_VERSION,
};
use tork_domain::{Action, Result, TorkError, TorkSettings};

const CONFIG_FILE_NAMES: [&str; 2] = ["tork.toml", "tork.json"];

/// Load settings from `.env`, an optional config file and the environment
///
/// # Errors
/// Returns `TorkError::Config` if:
/// - A `.env` file exists but cannot be parsed
/// - A probed config file is malformed
/// - An environment variable holds a malformed value
pub fn load() -> Result<TorkSettings> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => return Err(TorkError::Config(format!("Failed to load .env file: {}", e))),
    }

    let base = match probe_config_paths() {
        Some(path) => load_from_file(&path)?,
        None => {
            tracing::debug!("No config file found, starting from defaults");
            TorkSettings::default()
        }
    };

    let settings = apply_env_overrides(base)?;
    tracing::info!(
        default_action = %settings.default_action,
        policy_version = %settings.policy_version,
        custom_patterns = settings.custom_patterns.len(),
        "Governance configuration loaded"
    );
    Ok(settings)
}

/// Load settings from environment variables alone
///
/// Variables that are unset or empty fall back to defaults.
///
/// # Errors
/// Returns `TorkError::Config` if a variable holds a malformed value.
pub fn load_from_env() -> Result<TorkSettings> {
    apply_env_overrides(TorkSettings::default())
}

/// Overlay environment variables onto `settings`
///
/// `TORK_CUSTOM_PATTERNS` entries are merged into the existing custom
/// patterns: a name already present is replaced in place, new names are
/// appended.
///
/// # Errors
/// Returns `TorkError::Config` if a variable holds a malformed value.
pub fn apply_env_overrides(mut settings: TorkSettings) -> Result<TorkSettings> {
    if let Some(raw) = env_var(ENV_DEFAULT_ACTION) {
        settings.default_action = raw.parse::<Action>()?;
    }

    if let Some(version) = env_var(ENV_POLICY_VERSION) {
        settings.policy_version = version;
    }

    if let Some(raw) = env_var(ENV_CUSTOM_PATTERNS) {
        let patterns: IndexMap<String, String> = serde_json::from_str(&raw).map_err(|e| {
            TorkError::Config(format!("Invalid {} (expected JSON object): {}", ENV_CUSTOM_PATTERNS, e))
        })?;
        settings.custom_patterns.extend(patterns);
    }

    settings.govern_input = env_bool(ENV_GOVERN_INPUT, settings.govern_input)?;
    settings.govern_output = env_bool(ENV_GOVERN_OUTPUT, settings.govern_output)?;
    settings.govern_body = env_bool(ENV_GOVERN_BODY, settings.govern_body)?;

    Ok(settings)
}

/// Load settings from a file
///
/// Supports JSON and TOML formats (detected by file extension). Missing
/// keys take their defaults.
///
/// # Errors
/// Returns `TorkError::Config` if:
/// - The file does not exist or cannot be read
/// - The format is unsupported or invalid
/// - A value has the wrong type (for example an unknown action)
pub fn load_from_file(path: impl AsRef<Path>) -> Result<TorkSettings> {
    let config_path = path.as_ref();
    if !config_path.exists() {
        return Err(TorkError::Config(format!(
            "Config file not found: {}",
            config_path.display()
        )));
    }

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(config_path)
        .map_err(|e| TorkError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, config_path)
}

/// Parse settings from string content
///
/// Format is detected by file extension (`.json` or `.toml`); a path
/// without an extension is read as JSON.
fn parse_config(contents: &str, path: &Path) -> Result<TorkSettings> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let document: Value = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TorkError::Config(format!("Invalid TOML format: {}", e)))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| TorkError::Config(format!("Invalid JSON format: {}", e)))?,
        _ => {
            return Err(TorkError::Config(format!("Unsupported config format: {}", extension)))
        }
    };

    let section = match document {
        Value::Object(mut table) => match table.remove(CONFIG_TABLE) {
            Some(nested @ Value::Object(_)) => nested,
            Some(other) => {
                table.insert(CONFIG_TABLE.to_string(), other);
                Value::Object(table)
            }
            None => Value::Object(table),
        },
        other => other,
    };

    serde_json::from_value(section)
        .map_err(|e| TorkError::Config(format!("Invalid settings in {}: {}", path.display(), e)))
}

/// Probe standard locations for a settings file
///
/// Searches the current working directory, its `config/` subdirectory, its
/// parent, then the same places relative to the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.is_file())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    [dir.to_path_buf(), dir.join("config"), dir.join("..")]
        .iter()
        .flat_map(|base| CONFIG_FILE_NAMES.iter().map(move |name| base.join(name)))
        .collect()
}

/// Non-empty environment variable, trimmed.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed value, or `default` if the variable is unset or empty.
///
/// # Errors
/// Returns `TorkError::Config` for any other value.
fn env_bool(key: &str, default: bool) -> Result<bool> {
    match env_var(key) {
        None => Ok(default),
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(TorkError::Config(format!("Invalid boolean for {}: {}", key, raw))),
        },
    }
}
