//! Configuration structures
//!
//! Plain data only: loading from files or the environment lives in
//! `tork-infra`, and pattern validation happens when an engine is built.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_POLICY_VERSION;
use crate::types::Action;

/// Engine construction settings.
///
/// Every field has a default, so an empty TOML table or `{}` is valid. Keys
/// are accepted in `snake_case` or `camelCase`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceConfig {
    /// Action applied when at least one category is detected.
    #[serde(alias = "defaultAction")]
    pub default_action: Action,

    /// Version string stamped on every receipt.
    #[serde(alias = "policyVersion")]
    pub policy_version: String,

    /// Extra `name -> pattern source` rules, overlaid on the built-ins in
    /// insertion order.
    #[serde(alias = "customPatterns")]
    pub custom_patterns: IndexMap<String, String>,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            default_action: Action::default(),
            policy_version: DEFAULT_POLICY_VERSION.to_string(),
            custom_patterns: IndexMap::new(),
        }
    }
}

impl GovernanceConfig {
    /// Set the action applied when PII is found.
    pub fn with_default_action(mut self, action: Action) -> Self {
        self.default_action = action;
        self
    }

    /// Set the version stamped on receipts.
    pub fn with_policy_version(mut self, version: impl Into<String>) -> Self {
        self.policy_version = version.into();
        self
    }

    /// Add or replace a custom rule. Re-adding a name keeps its position.
    pub fn with_custom_pattern(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.custom_patterns.insert(name.into(), source.into());
        self
    }
}

/// Which parts of an HTTP exchange a payload adapter governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiddlewareOptions {
    /// Query strings and, with `govern_body`, request bodies.
    #[serde(alias = "governInput")]
    pub govern_input: bool,

    /// Response bodies.
    #[serde(alias = "governOutput")]
    pub govern_output: bool,

    /// Request bodies (only consulted when `govern_input` is set).
    #[serde(alias = "governBody")]
    pub govern_body: bool,
}

impl Default for MiddlewareOptions {
    fn default() -> Self {
        Self { govern_input: true, govern_output: true, govern_body: true }
    }
}

/// Everything a configuration source can carry, in one flat table.
///
/// Files and environment variables describe engine and middleware settings
/// side by side; [`TorkSettings::governance`] and
/// [`TorkSettings::middleware`] split them for their consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorkSettings {
    /// Action applied when PII is found.
    #[serde(alias = "defaultAction")]
    pub default_action: Action,

    /// Version stamped on every receipt.
    #[serde(alias = "policyVersion")]
    pub policy_version: String,

    /// Extra category rules, overlaid on the built-ins.
    #[serde(alias = "customPatterns")]
    pub custom_patterns: IndexMap<String, String>,

    /// Govern query strings and request bodies.
    #[serde(alias = "governInput")]
    pub govern_input: bool,

    /// Govern response bodies.
    #[serde(alias = "governOutput")]
    pub govern_output: bool,

    /// Govern request bodies.
    #[serde(alias = "governBody")]
    pub govern_body: bool,
}

impl Default for TorkSettings {
    fn default() -> Self {
        Self::from_parts(GovernanceConfig::default(), MiddlewareOptions::default())
    }
}

impl TorkSettings {
    /// Merge engine and middleware settings into one table.
    pub fn from_parts(governance: GovernanceConfig, middleware: MiddlewareOptions) -> Self {
        Self {
            default_action: governance.default_action,
            policy_version: governance.policy_version,
            custom_patterns: governance.custom_patterns,
            govern_input: middleware.govern_input,
            govern_output: middleware.govern_output,
            govern_body: middleware.govern_body,
        }
    }

    /// Engine half of the settings.
    pub fn governance(&self) -> GovernanceConfig {
        GovernanceConfig {
            default_action: self.default_action,
            policy_version: self.policy_version.clone(),
            custom_patterns: self.custom_patterns.clone(),
        }
    }

    /// Middleware half of the settings.
    pub fn middleware(&self) -> MiddlewareOptions {
        MiddlewareOptions {
            govern_input: self.govern_input,
            govern_output: self.govern_output,
            govern_body: self.govern_body,
        }
    }
}
