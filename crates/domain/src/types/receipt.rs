//! Audit receipt for one governance decision

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::action::Action;
use crate::utils::timestamp::{format_receipt_timestamp, serde_receipt_timestamp, truncate_to_seconds};

/// Immutable record of a single `govern` call.
///
/// Fields are private and only readable through accessors; a receipt is
/// never modified after it is issued. The JSON form uses camelCase keys:
///
/// ```json
/// {
///   "receiptId": "tork_9f86d081884c7d659a2feaa0c55ad015",
///   "timestamp": "2026-01-01T12:00:00+00:00",
///   "action": "redact",
///   "piiTypesDetected": ["SSN", "EMAIL"],
///   "policyVersion": "1.0.0"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceReceipt {
    receipt_id: String,
    #[serde(with = "serde_receipt_timestamp")]
    timestamp: DateTime<Utc>,
    action: Action,
    pii_types_detected: Vec<String>,
    policy_version: String,
}

impl GovernanceReceipt {
    /// Assemble a receipt. The timestamp is truncated to whole seconds.
    pub fn new(
        receipt_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        action: Action,
        pii_types_detected: Vec<String>,
        policy_version: impl Into<String>,
    ) -> Self {
        Self {
            receipt_id: receipt_id.into(),
            timestamp: truncate_to_seconds(timestamp),
            action,
            pii_types_detected,
            policy_version: policy_version.into(),
        }
    }

    /// `tork_` followed by 32 lowercase hex characters.
    pub fn receipt_id(&self) -> &str {
        &self.receipt_id
    }

    /// Decision time, truncated to whole seconds.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Action taken.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Detected category names in registry order.
    pub fn pii_types_detected(&self) -> &[String] {
        &self.pii_types_detected
    }

    /// Policy version in force.
    pub fn policy_version(&self) -> &str {
        &self.policy_version
    }

    /// The receipt as a JSON object, in the same shape `serde` produces.
    pub fn to_json_value(&self) -> Value {
        json!({
            "receiptId": self.receipt_id,
            "timestamp": format_receipt_timestamp(&self.timestamp),
            "action": self.action.as_str(),
            "piiTypesDetected": self.pii_types_detected,
            "policyVersion": self.policy_version,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample() -> GovernanceReceipt {
        GovernanceReceipt::new(
            "tork_00112233445566778899aabbccddeeff",
            Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
            Action::Redact,
            vec!["SSN".to_string(), "EMAIL".to_string()],
            "1.0.0",
        )
    }

    #[test]
    fn serializes_camel_case_keys_in_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"receiptId":"tork_00112233445566778899aabbccddeeff","timestamp":"2026-01-01T12:00:00+00:00","action":"redact","piiTypesDetected":["SSN","EMAIL"],"policyVersion":"1.0.0"}"#
        );
    }

    #[test]
    fn to_json_value_matches_serde_output() {
        let receipt = sample();
        assert_eq!(receipt.to_json_value(), serde_json::to_value(&receipt).unwrap());
    }

    #[test]
    fn deserializes_from_wire_shape() {
        let receipt = sample();
        let json = serde_json::to_string(&receipt).unwrap();
        let parsed: GovernanceReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, receipt);
        assert_eq!(parsed.pii_types_detected(), ["SSN", "EMAIL"]);
    }
}
