//! Governance engine - detect, decide, redact, issue receipt

use std::fmt;
use std::sync::Arc;

use tork_common::privacy::patterns::PatternRegistry;
use tork_domain::{Action, GovernanceConfig};
use tracing::debug;

use super::ports::{EntropySource, ReceiptSink};
use super::receipt::ReceiptIssuer;
use super::redaction::redact;
use super::result::GovernanceResult;
use crate::errors::Result;

/// PII governance engine
///
/// Holds one immutable pattern registry plus the policy it applies. All
/// state is fixed at construction, so a single engine (or cheap clones of
/// it) can serve any number of threads without locking.
#[derive(Clone)]
pub struct GovernanceEngine {
    registry: Arc<PatternRegistry>,
    default_action: Action,
    issuer: ReceiptIssuer,
}

impl fmt::Debug for GovernanceEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GovernanceEngine")
            .field("categories", &self.registry.names().collect::<Vec<_>>())
            .field("default_action", &self.default_action)
            .field("policy_version", &self.issuer.policy_version())
            .finish()
    }
}

impl GovernanceEngine {
    /// Build an engine from `config`.
    ///
    /// # Errors
    /// [`GovernanceError::Pattern`](crate::GovernanceError::Pattern) if any
    /// custom pattern is blank-named, does not compile or matches the empty
    /// string.
    pub fn new(config: GovernanceConfig) -> Result<Self> {
        let GovernanceConfig { default_action, policy_version, custom_patterns } = config;
        let registry = PatternRegistry::build(custom_patterns)?;

        debug!(
            categories = registry.len(),
            default_action = %default_action,
            policy_version = %policy_version,
            "Governance engine initialized"
        );

        Ok(Self {
            registry: Arc::new(registry),
            default_action,
            issuer: ReceiptIssuer::new(policy_version),
        })
    }

    /// Engine with built-in patterns, `redact` and policy version `1.0.0`.
    pub fn with_defaults() -> Result<Self> {
        Self::new(GovernanceConfig::default())
    }

    /// Replace the randomness used for receipt ids.
    pub fn with_entropy_source(mut self, entropy: impl EntropySource + 'static) -> Self {
        self.issuer =
            ReceiptIssuer::with_entropy(self.issuer.policy_version().to_string(), Arc::new(entropy));
        self
    }

    /// Registry built from the configuration.
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Action applied when PII is found.
    pub fn default_action(&self) -> Action {
        self.default_action
    }

    /// Version stamped on receipts.
    pub fn policy_version(&self) -> &str {
        self.issuer.policy_version()
    }

    /// Govern one piece of content.
    ///
    /// Never fails because of the content itself; the only error is
    /// [`GovernanceError::RandomnessUnavailable`](crate::GovernanceError::RandomnessUnavailable).
    pub fn govern(&self, content: &str) -> Result<GovernanceResult> {
        let pii = self.registry.scan(content);
        let action = if pii.is_empty() { Action::Allow } else { self.default_action };

        let output =
            if action.modifies_content() { redact(content, &pii) } else { content.to_string() };

        let categories = pii.categories();
        debug!(
            action = %action,
            categories = ?categories,
            content_len = content.len(),
            "Governed content"
        );

        let receipt = self.issuer.issue(action, categories)?;
        Ok(GovernanceResult { action, output, pii, receipt })
    }

    /// Govern `content` and hand its receipt to `sink`.
    pub fn govern_into<S>(&self, content: &str, sink: &mut S) -> Result<GovernanceResult>
    where
        S: ReceiptSink + ?Sized,
    {
        let result = self.govern(content)?;
        sink.record(result.receipt.clone())?;
        Ok(result)
    }
}
