//! Receipt issuing
//!
//! Receipt ids are `tork_` followed by 32 lowercase hex characters drawn from
//! 16 bytes of OS randomness. There is no fallback to a weaker generator: if
//! the entropy source fails, no receipt is issued.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use tork_domain::constants::{RECEIPT_ID_PREFIX, RECEIPT_ID_RANDOM_BYTES};
use tork_domain::{Action, GovernanceReceipt};

use super::ports::EntropySource;
use crate::errors::{GovernanceError, Result};

/// Operating-system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| GovernanceError::RandomnessUnavailable(e.to_string()))
    }
}

/// Builds receipts for a single engine
#[derive(Clone)]
pub struct ReceiptIssuer {
    entropy: Arc<dyn EntropySource>,
    policy_version: Arc<str>,
}

impl fmt::Debug for ReceiptIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiptIssuer").field("policy_version", &self.policy_version).finish()
    }
}

impl ReceiptIssuer {
    /// Issuer backed by [`OsEntropy`].
    pub fn new(policy_version: impl Into<Arc<str>>) -> Self {
        Self::with_entropy(policy_version, Arc::new(OsEntropy))
    }

    /// Issuer drawing id bytes from `entropy`.
    pub fn with_entropy(policy_version: impl Into<Arc<str>>, entropy: Arc<dyn EntropySource>) -> Self {
        Self { entropy, policy_version: policy_version.into() }
    }

    /// Version stamped on issued receipts.
    pub fn policy_version(&self) -> &str {
        &self.policy_version
    }

    /// Fresh `tork_<32 hex>` identifier.
    pub fn next_receipt_id(&self) -> Result<String> {
        let mut bytes = [0u8; RECEIPT_ID_RANDOM_BYTES];
        self.entropy.fill(&mut bytes)?;
        Ok(format!("{}{}", RECEIPT_ID_PREFIX, hex::encode(bytes)))
    }

    /// Issue a receipt stamped with the current time.
    pub fn issue(&self, action: Action, pii_types_detected: Vec<String>) -> Result<GovernanceReceipt> {
        self.issue_at(Utc::now(), action, pii_types_detected)
    }

    /// Issue a receipt stamped with `timestamp`.
    pub fn issue_at(
        &self,
        timestamp: DateTime<Utc>,
        action: Action,
        pii_types_detected: Vec<String>,
    ) -> Result<GovernanceReceipt> {
        let receipt_id = self.next_receipt_id()?;
        Ok(GovernanceReceipt::new(
            receipt_id,
            timestamp,
            action,
            pii_types_detected,
            self.policy_version.as_ref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;
    use tork_domain::constants::RECEIPT_ID_LEN;

    use super::*;

    struct FixedEntropy(u8);

    impl EntropySource for FixedEntropy {
        fn fill(&self, buf: &mut [u8]) -> Result<()> {
            buf.fill(self.0);
            Ok(())
        }
    }

    struct BrokenEntropy;

    impl EntropySource for BrokenEntropy {
        fn fill(&self, _buf: &mut [u8]) -> Result<()> {
            Err(GovernanceError::RandomnessUnavailable("no entropy".into()))
        }
    }

    #[test]
    fn receipt_id_is_prefixed_lowercase_hex() {
        let issuer = ReceiptIssuer::with_entropy("1.0.0", Arc::new(FixedEntropy(0xAB)));
        let id = issuer.next_receipt_id().unwrap();
        assert_eq!(id, format!("tork_{}", "ab".repeat(16)));
        assert_eq!(id.len(), RECEIPT_ID_LEN);
    }

    #[test]
    fn os_entropy_ids_are_unique() {
        let issuer = ReceiptIssuer::new("1.0.0");
        let ids: HashSet<String> = (0..256).map(|_| issuer.next_receipt_id().unwrap()).collect();
        assert_eq!(ids.len(), 256);
        assert!(ids.iter().all(|id| {
            id.len() == RECEIPT_ID_LEN
                && id[RECEIPT_ID_PREFIX.len()..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
        }));
    }

    #[test]
    fn issue_at_fills_every_field() {
        let issuer = ReceiptIssuer::with_entropy("2.3.4", Arc::new(FixedEntropy(1)));
        let ts = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let receipt = issuer.issue_at(ts, Action::Deny, vec!["SSN".into()]).unwrap();

        assert_eq!(receipt.timestamp(), ts);
        assert_eq!(receipt.action(), Action::Deny);
        assert_eq!(receipt.pii_types_detected(), ["SSN"]);
        assert_eq!(receipt.policy_version(), "2.3.4");
    }

    #[test]
    fn failing_entropy_issues_nothing() {
        let issuer = ReceiptIssuer::with_entropy("1.0.0", Arc::new(BrokenEntropy));
        let err = issuer.issue(Action::Allow, Vec::new()).unwrap_err();
        assert!(matches!(err, GovernanceError::RandomnessUnavailable(_)));
    }
}
