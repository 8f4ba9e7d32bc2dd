//! Port interfaces for governance side effects
//!
//! The engine itself is pure apart from two effects: drawing randomness for
//! receipt ids and handing receipts to whoever audits them. Both go through
//! the traits below so callers and tests can swap them.

use std::sync::mpsc;

use tork_domain::GovernanceReceipt;

use crate::errors::{GovernanceError, Result};

/// Source of cryptographically secure random bytes
pub trait EntropySource: Send + Sync {
    /// Fill `buf` completely or fail with
    /// [`GovernanceError::RandomnessUnavailable`].
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// Destination for issued receipts
///
/// Owned by the caller; the engine never accumulates receipts itself.
pub trait ReceiptSink {
    /// Accept one receipt.
    fn record(&mut self, receipt: GovernanceReceipt) -> Result<()>;
}

impl ReceiptSink for Vec<GovernanceReceipt> {
    fn record(&mut self, receipt: GovernanceReceipt) -> Result<()> {
        self.push(receipt);
        Ok(())
    }
}

impl ReceiptSink for mpsc::Sender<GovernanceReceipt> {
    fn record(&mut self, receipt: GovernanceReceipt) -> Result<()> {
        self.send(receipt)
            .map_err(|_| GovernanceError::ReceiptSink("receipt receiver disconnected".to_string()))
    }
}

impl<S: ReceiptSink + ?Sized> ReceiptSink for &mut S {
    fn record(&mut self, receipt: GovernanceReceipt) -> Result<()> {
        (**self).record(receipt)
    }
}

/// [`ReceiptSink`] backed by a closure; see [`sink_fn`].
pub struct FnSink<F>(F);

impl<F> ReceiptSink for FnSink<F>
where
    F: FnMut(GovernanceReceipt),
{
    fn record(&mut self, receipt: GovernanceReceipt) -> Result<()> {
        (self.0)(receipt);
        Ok(())
    }
}

/// Wrap a closure as a receipt sink.
///
/// ```
/// use tork_core::{sink_fn, GovernanceEngine};
///
/// let engine = GovernanceEngine::with_defaults().unwrap();
/// let mut ids = Vec::new();
/// let mut sink = sink_fn(|receipt| ids.push(receipt.receipt_id().to_string()));
/// engine.govern_into("ssn 123-45-6789", &mut sink).unwrap();
/// drop(sink);
/// assert_eq!(ids.len(), 1);
/// ```
pub fn sink_fn<F>(f: F) -> FnSink<F>
where
    F: FnMut(GovernanceReceipt),
{
    FnSink(f)
}
