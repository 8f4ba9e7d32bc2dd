//! Framework-agnostic request/response governing
//!
//! Web framework adapters convert their request and response types into
//! [`RequestPayload`] / [`ResponsePayload`], run them through a
//! [`PayloadGovernor`] and copy the governed values back.

/// Payload walker and report.
pub mod payload;

pub use payload::{Body, GovernanceReport, PayloadGovernor, RequestPayload, ResponsePayload};
