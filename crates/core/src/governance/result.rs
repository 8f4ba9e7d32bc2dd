//! Outcome of a single governance call

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tork_common::privacy::patterns::DetectionMap;
use tork_domain::{Action, GovernanceReceipt};

/// What `govern` decided, what it produced and the receipt proving it.
///
/// `output` equals the input unless `action` is [`Action::Redact`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceResult {
    /// Action taken.
    pub action: Action,
    /// Redacted text for `redact`, the input otherwise.
    pub output: String,
    /// Everything detected, in registry order.
    pub pii: DetectionMap,
    /// Audit record of this call.
    pub receipt: GovernanceReceipt,
}

impl GovernanceResult {
    /// True when at least one category was detected.
    pub fn has_pii(&self) -> bool {
        !self.pii.is_empty()
    }

    /// True when the content must not be forwarded.
    pub fn is_denied(&self) -> bool {
        self.action == Action::Deny
    }

    /// The result as `{action, output, pii, receipt}`.
    pub fn to_json_value(&self) -> Value {
        let pii: serde_json::Map<String, Value> = self
            .pii
            .iter()
            .map(|(category, matches)| (category.to_string(), json!(matches)))
            .collect();
        json!({
            "action": self.action.as_str(),
            "output": self.output,
            "pii": pii,
            "receipt": self.receipt.to_json_value(),
        })
    }
}
