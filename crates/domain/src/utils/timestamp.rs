//! Receipt timestamp formatting
//!
//! Receipts carry ISO-8601 timestamps at second precision with a numeric
//! offset (`2026-01-01T12:00:00+00:00`), never the `Z` shorthand and never
//! fractional seconds.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Drop sub-second precision so a formatted timestamp parses back equal.
#[must_use]
pub fn truncate_to_seconds(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp.trunc_subsecs(0)
}

/// Format `timestamp` in the receipt layout.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tork_domain::utils::timestamp::format_receipt_timestamp;
///
/// let ts = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(format_receipt_timestamp(&ts), "2026-01-01T12:00:00+00:00");
/// ```
#[must_use]
pub fn format_receipt_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Parse any RFC 3339 timestamp and normalise it to UTC seconds.
pub fn parse_receipt_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|ts| truncate_to_seconds(ts.with_timezone(&Utc)))
}

/// `#[serde(with = "...")]` adapter for receipt timestamps.
pub mod serde_receipt_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Write as a second-precision RFC 3339 string with offset.
    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_receipt_timestamp(timestamp))
    }

    /// Read any RFC 3339 string, truncated to seconds.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_receipt_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
